mod security;

pub use security::security_headers_middleware;
