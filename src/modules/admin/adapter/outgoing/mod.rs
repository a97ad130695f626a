mod auth_gateway_http;

pub use auth_gateway_http::AuthGatewayHttp;
