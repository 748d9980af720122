//! The feed holds the in-memory mirror of the collection service.
//! It reflects the last successful read or write, with the like counters mutated
//! locally on top. Like counts are never sent back to the service, so they reset
//! whenever the feed is refreshed.

use crate::post::Post;



pub struct Feed {
	posts: Vec<Post>
}



impl Feed {

	pub fn new() -> Self {
		Self {
			posts: Vec::new()
		}
	}

	pub fn posts( &self ) -> &[Post] {
		&self.posts
	}

	pub fn len( &self ) -> usize {
		self.posts.len()
	}

	pub fn is_empty( &self ) -> bool {
		self.posts.is_empty()
	}

	/// Replaces the whole feed with what the service returned.
	pub fn replace_all( &mut self, posts: Vec<Post> ) {
		self.posts = posts;
	}

	/// Puts a freshly created post at the end of the feed.
	pub fn append( &mut self, post: Post ) {
		self.posts.push( post );
	}

	/// Bumps the like counter of the post with the given id.
	/// Returns whether a post with that id existed.
	pub fn like( &mut self, id: &str ) -> bool {

		match self.posts.iter_mut().find(|p| p.id == id) {
			None => false,
			Some(post) => {
				post.likes += 1;
				true
			}
		}
	}

	/// Drops the post with the given id from the feed.
	/// Returns whether a post with that id existed.
	pub fn remove( &mut self, id: &str ) -> bool {

		let before = self.posts.len();
		self.posts.retain(|p| p.id != id);

		self.posts.len() != before
	}
}

impl Default for Feed {
	fn default() -> Self {
		Self::new()
	}
}
