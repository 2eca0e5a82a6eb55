mod byte_order_tests;
mod reader_tests;
