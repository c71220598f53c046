pub mod testing;
pub mod wallet;
pub mod websocket;
