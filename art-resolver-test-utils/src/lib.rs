pub mod art_mock_server;
pub mod common;
