use std::env;



pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:7777";
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/api/v1/Blog";



#[derive(Clone, Debug)]
pub struct Config {
	/// The address the UI itself is served on.
	pub bind_address: String,
	/// Base URL of the remote blog collection service.
	pub service_url: String
}



impl Config {

	/// Reads the configuration from the environment, falling back to the defaults.
	/// A `.env` file next to the binary is honored when present.
	pub fn from_env() -> Self {
		let _ = dotenvy::dotenv();

		Self {
			bind_address: env::var("BLOGSPHERE_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned()),
			service_url: env::var("BLOGSPHERE_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_owned())
		}
	}
}
