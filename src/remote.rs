//! Client for the remote blog collection service.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::post::{NewPost, Post};



/// A handle to the collection endpoint of the blog service.
#[derive(Clone)]
pub struct Handle {
	http: reqwest::Client,
	base_url: String
}

/// The error that may occur while talking to the collection service.
/// The service is assumed to run on a fixed local origin; there is no
/// authentication and no retrying here.
#[derive(Debug, Error)]
pub enum Error {
	#[error("transport error: {0}")]
	Transport( #[from] reqwest::Error ),
	#[error("service responded with status {0}")]
	Status( StatusCode )
}

pub type Result<T> = std::result::Result<T, Error>;



impl Handle {

	pub fn new( base_url: &str ) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.trim_end_matches('/').to_owned()
		}
	}

	fn collection_url( &self ) -> String {
		format!("{}/", self.base_url)
	}

	fn record_url( &self, id: &str ) -> String {
		format!("{}/{}", self.base_url, id)
	}

	/// Reads the whole collection in one go. The service does not paginate.
	pub async fn list( &self ) -> Result<Vec<Post>> {

		let response = self.http.get( self.collection_url() ).send().await?;
		if !response.status().is_success() {
			return Err( Error::Status( response.status() ) )
		}

		let posts: Vec<Post> = response.json().await?;
		debug!("Fetched {} posts", posts.len());

		Ok( posts )
	}

	/// Submits a new post. The service assigns the id and returns the full record.
	pub async fn create( &self, post: &NewPost ) -> Result<Post> {

		let response = self.http.post( self.collection_url() ).json( post ).send().await?;
		if !response.status().is_success() {
			return Err( Error::Status( response.status() ) )
		}

		let created: Post = response.json().await?;
		debug!("Created post {}", created.id);

		Ok( created )
	}

	/// Deletes the post with the given id. The response body is ignored.
	pub async fn delete( &self, id: &str ) -> Result<()> {

		let response = self.http.delete( self.record_url( id ) ).send().await?;
		if !response.status().is_success() {
			return Err( Error::Status( response.status() ) )
		}

		Ok(())
	}
}
