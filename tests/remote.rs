use serde_json::json;
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{body_partial_json, method, path};

use blogsphere::post::{Draft, Post};
use blogsphere::remote;



fn record( id: &str, title: &str, likes: u64 ) -> serde_json::Value {
	json!({
		"_id": id,
		"title": title,
		"content": "body",
		"author": "dany",
		"category": "general",
		"likes": likes,
		"comments": ""
	})
}



#[tokio::test]
async fn list_returns_all_posts() {
	let server = MockServer::start().await;

	Mock::given(method("GET")).and(path("/"))
		.respond_with( ResponseTemplate::new(200).set_body_json(json!([
			record("a", "First", 2),
			record("b", "Second", 0)
		])) )
		.expect(1)
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );
	let posts = handle.list().await.unwrap();

	assert_eq!( posts.len(), 2 );
	assert_eq!( posts[0].id, "a" );
	assert_eq!( posts[0].likes, 2 );
	assert_eq!( posts[1].title, "Second" );
}

#[tokio::test]
async fn missing_counters_default_to_zero() {
	let server = MockServer::start().await;

	// Records written before the service tracked likes have no such field.
	Mock::given(method("GET")).and(path("/"))
		.respond_with( ResponseTemplate::new(200).set_body_json(json!([
			{
				"_id": "old",
				"title": "Ancient",
				"content": "body",
				"author": "dany",
				"category": "general"
			}
		])) )
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );
	let posts = handle.list().await.unwrap();

	assert_eq!( posts[0].likes, 0 );
	assert_eq!( posts[0].comments, "" );
}

#[tokio::test]
async fn list_propagates_service_errors() {
	let server = MockServer::start().await;

	Mock::given(method("GET")).and(path("/"))
		.respond_with( ResponseTemplate::new(500) )
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );

	match handle.list().await {
		Err( remote::Error::Status(code) ) => assert_eq!( code.as_u16(), 500 ),
		other => panic!("expected a status error, got {:?}", other.map(|p| p.len()))
	}
}

#[tokio::test]
async fn list_fails_on_malformed_body() {
	let server = MockServer::start().await;

	Mock::given(method("GET")).and(path("/"))
		.respond_with( ResponseTemplate::new(200).set_body_string("not json") )
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );

	assert!( matches!( handle.list().await, Err( remote::Error::Transport(_) ) ) );
}

#[tokio::test]
async fn create_sends_a_zeroed_like_counter() {
	let server = MockServer::start().await;

	Mock::given(method("POST")).and(path("/"))
		.and( body_partial_json(json!({ "title": "First", "likes": 0, "comments": "" })) )
		.respond_with( ResponseTemplate::new(201).set_body_json(record("abc", "First", 0)) )
		.expect(1)
		.mount(&server).await;

	let draft = Draft {
		title: "First".into(),
		content: "Hello there.".into(),
		author: "dany".into(),
		category: "general".into(),
		comments: String::new()
	};
	let payload = draft.validate().unwrap();

	let handle = remote::Handle::new( &server.uri() );
	let created: Post = handle.create( &payload ).await.unwrap();

	assert_eq!( created.id, "abc" );
	assert_eq!( created.title, "First" );
}

#[tokio::test]
async fn create_propagates_service_errors() {
	let server = MockServer::start().await;

	Mock::given(method("POST")).and(path("/"))
		.respond_with( ResponseTemplate::new(500) )
		.mount(&server).await;

	let draft = Draft {
		title: "First".into(),
		content: "Hello there.".into(),
		author: "dany".into(),
		category: "general".into(),
		comments: String::new()
	};
	let handle = remote::Handle::new( &server.uri() );

	assert!( matches!( handle.create( &draft.validate().unwrap() ).await, Err( remote::Error::Status(_) ) ) );
}

#[tokio::test]
async fn delete_targets_a_single_record() {
	let server = MockServer::start().await;

	Mock::given(method("DELETE")).and(path("/abc"))
		.respond_with( ResponseTemplate::new(200) )
		.expect(1)
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );
	handle.delete("abc").await.unwrap();
}

#[tokio::test]
async fn delete_propagates_service_errors() {
	let server = MockServer::start().await;

	Mock::given(method("DELETE")).and(path("/abc"))
		.respond_with( ResponseTemplate::new(404) )
		.mount(&server).await;

	let handle = remote::Handle::new( &server.uri() );

	match handle.delete("abc").await {
		Err( remote::Error::Status(code) ) => assert_eq!( code.as_u16(), 404 ),
		other => panic!("expected a status error, got {:?}", other)
	}
}

#[tokio::test]
async fn trailing_slash_in_the_service_url_is_tolerated() {
	let server = MockServer::start().await;

	Mock::given(method("GET")).and(path("/api/v1/Blog/"))
		.respond_with( ResponseTemplate::new(200).set_body_json(json!([])) )
		.expect(1)
		.mount(&server).await;

	let handle = remote::Handle::new( &format!("{}/api/v1/Blog/", server.uri()) );

	assert!( handle.list().await.unwrap().is_empty() );
}
