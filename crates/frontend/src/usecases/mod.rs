pub mod u501_order_session;
