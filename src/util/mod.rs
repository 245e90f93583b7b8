pub mod request_ext;
