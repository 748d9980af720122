use std::sync::RwLock;



pub mod config;
pub mod feed;
pub mod post;
pub mod remote;
pub mod web;



/// Everything the request handlers share: the service client, the in-memory feed
/// and the template engine.
pub struct Globals {
	pub remote: remote::Handle,
	pub feed: RwLock<feed::Feed>,
	pub tera: tera::Tera
}
