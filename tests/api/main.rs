mod helpers;
mod ipn;
