use serde::{Serialize, Deserialize};
use thiserror::Error;



#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
	/// Assigned by the collection service, never by us.
	#[serde(rename = "_id")]
	pub id: String,
	pub title: String,
	pub content: String,
	pub author: String,
	pub category: String,
	#[serde(default)]
	pub likes: u64,
	/// Accepted by the service on creation, but not shown anywhere.
	#[serde(default)]
	pub comments: String
}

/// The in-progress state of the creation form.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Draft {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub author: String,
	#[serde(default)]
	pub category: String,
	// The form has no input for this field.
	#[serde(default)]
	pub comments: String
}

/// The body sent to the collection service when creating a post.
#[derive(Clone, Debug, Serialize)]
pub struct NewPost {
	pub title: String,
	pub content: String,
	pub author: String,
	pub category: String,
	pub comments: String,
	pub likes: u64
}

#[derive(Debug, Error)]
pub enum DraftError {
	#[error("all fields are required")]
	Incomplete
}



impl Draft {

	/// Checks that title, content, author and category are all non-empty after trimming whitespace.
	/// The payload keeps the fields as they were entered; trimming is only applied for the check.
	pub fn validate( &self ) -> Result<NewPost, DraftError> {

		let complete = !self.title.trim().is_empty()
			&& !self.content.trim().is_empty()
			&& !self.author.trim().is_empty()
			&& !self.category.trim().is_empty();
		if !complete { return Err( DraftError::Incomplete ) }

		Ok( NewPost {
			title: self.title.clone(),
			content: self.content.clone(),
			author: self.author.clone(),
			category: self.category.clone(),
			comments: self.comments.clone(),
			likes: 0
		} )
	}
}
