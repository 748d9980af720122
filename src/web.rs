use actix_web::{error, get, http::header, HttpResponse, post, web};
use tera;
use tracing::{debug, error as log_error};

use std::sync::Arc;

use crate::post::Draft;
use crate::Globals;



const VALIDATION_MESSAGE: &str = "All fields are required!";
const CREATE_FAILED_MESSAGE: &str = "Failed to create the post. Please try again.";



/// Registers every page of the UI.
pub fn routes( cfg: &mut web::ServiceConfig ) {
	cfg
		.service(feed_page)
		.service(feed_refresh)
		.service(post_new)
		.service(post_new_submit)
		.service(post_like)
		.service(post_delete);
}



fn render( g: &Globals, template: &str, context: &tera::Context ) -> error::Result<HttpResponse> {

	let html = g.tera.render(template, context)
		.map_err(|e| { log_error!("Template error: {}", e); error::ErrorInternalServerError("Template error") })?;

	Ok( HttpResponse::Ok().content_type("text/html").body(html) )
}

fn back_to_feed() -> HttpResponse {
	HttpResponse::Found().append_header((header::LOCATION, "/")).finish()
}



#[get("/")]
pub async fn feed_page( g: web::Data<Arc<Globals>> ) -> error::Result<HttpResponse> {

	let mut context = tera::Context::new();
	{
		let feed = g.feed.read().unwrap();
		context.insert("posts", feed.posts());
	}

	render( &g, "feed.html", &context )
}

/// Re-reads the whole collection from the service and replaces the feed with it.
/// When the service is unreachable the stale feed stays visible; the user is not told.
#[post("/refresh")]
pub async fn feed_refresh( g: web::Data<Arc<Globals>> ) -> HttpResponse {

	match g.remote.list().await {
		Err(e) => log_error!("Error fetching posts: {}", e),
		Ok(posts) => g.feed.write().unwrap().replace_all( posts )
	}

	back_to_feed()
}

#[get("/post/new")]
pub async fn post_new( g: web::Data<Arc<Globals>> ) -> error::Result<HttpResponse> {

	let mut context = tera::Context::new();
	context.insert("draft", &Draft::default());

	render( &g, "post-new.html", &context )
}

/// Handles the submitted creation form.
/// An incomplete draft is bounced back with a blocking message before anything is
/// sent to the service; a failed creation is bounced back likewise. Only a
/// successful creation appends to the feed and leaves the form.
#[post("/post/new")]
pub async fn post_new_submit( g: web::Data<Arc<Globals>>, form: web::Form<Draft> ) -> error::Result<HttpResponse> {

	let draft = form.into_inner();

	let payload = match draft.validate() {
		Err(_) => {
			let mut context = tera::Context::new();
			context.insert("draft", &draft);
			context.insert("error", VALIDATION_MESSAGE);
			return render( &g, "post-new.html", &context )
		},
		Ok(payload) => payload
	};

	match g.remote.create( &payload ).await {
		Err(e) => {
			log_error!("Error creating post: {}", e);

			let mut context = tera::Context::new();
			context.insert("draft", &draft);
			context.insert("error", CREATE_FAILED_MESSAGE);
			render( &g, "post-new.html", &context )
		},
		Ok(created) => {
			g.feed.write().unwrap().append( created );
			Ok( back_to_feed() )
		}
	}
}

/// Likes never reach the service; the counter lives in the feed only and resets on
/// the next refresh.
#[post("/post/{id}/like")]
pub async fn post_like( g: web::Data<Arc<Globals>>, p: web::Path<String> ) -> HttpResponse {

	let id = p.into_inner();
	if !g.feed.write().unwrap().like( &id ) {
		debug!("Ignoring like for unknown post {}", id);
	}

	back_to_feed()
}

/// Deletes the post from the service, then from the feed.
/// A failed deletion is only logged; the post stays in the feed.
#[post("/post/{id}/delete")]
pub async fn post_delete( g: web::Data<Arc<Globals>>, p: web::Path<String> ) -> HttpResponse {

	let id = p.into_inner();

	match g.remote.delete( &id ).await {
		Err(e) => log_error!("Error deleting post {}: {}", id, e),
		Ok(()) => {
			g.feed.write().unwrap().remove( &id );
		}
	}

	back_to_feed()
}
