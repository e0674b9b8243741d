mod coinpayments;
