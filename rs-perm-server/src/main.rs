use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};
use serde::Deserialize;

use rs_perm_core::generator::PermutationGenerator;

/// Largest size accepted over the wire; n! rows are materialized per
/// request, and 10! is already 3 628 800.
const MAX_SIZE: i64 = 10;

/// Struct representing query parameters for the `/v1/permutations` endpoint
#[derive(Deserialize)]
struct PermutationParams {
	n: i64,
	offset: Option<i64>,
	limit: Option<usize>,
}

/// Struct representing query parameters for the `/v1/count` endpoint
#[derive(Deserialize)]
struct CountParams {
	n: i64,
}

/// HTTP GET endpoint `/v1/permutations`
///
/// Generates permutations of `offset..offset+n-1` in SJT order and returns
/// them as a JSON array of arrays. An optional `limit` truncates the output;
/// otherwise all `n!` permutations are returned.
///
/// Each request builds its own generator: instances are cheap and fully
/// independent, so no shared state is needed across requests.
#[get("/v1/permutations")]
async fn get_permutations(query: web::Query<PermutationParams>) -> impl Responder {
	if query.n > MAX_SIZE {
		warn!("rejected permutation request for n = {}", query.n);
		return HttpResponse::BadRequest()
			.body(format!("n must be at most {}", MAX_SIZE));
	}

	let offset = query.offset.unwrap_or(0);
	let mut generator = match PermutationGenerator::with_offset(query.n, offset) {
		Ok(g) => g,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let mut permutations: Vec<Vec<i64>> = Vec::new();
	while generator.has_next() {
		if let Some(limit) = query.limit {
			if permutations.len() >= limit {
				break;
			}
		}
		match generator.next() {
			Ok(permutation) => permutations.push(permutation),
			Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
		}
	}

	info!(
		"produced {} permutation(s) for n = {}, offset = {}",
		permutations.len(),
		query.n,
		offset
	);
	HttpResponse::Ok().json(permutations)
}

/// HTTP GET endpoint `/v1/count`
///
/// Drains a generator and returns how many permutations it produced
/// (`n!`), exercising the termination contract end to end.
#[get("/v1/count")]
async fn get_count(query: web::Query<CountParams>) -> impl Responder {
	if query.n > MAX_SIZE {
		warn!("rejected count request for n = {}", query.n);
		return HttpResponse::BadRequest()
			.body(format!("n must be at most {}", MAX_SIZE));
	}

	let mut generator = match PermutationGenerator::new(query.n) {
		Ok(g) => g,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let mut count: u64 = 0;
	while generator.has_next() {
		if let Err(e) = generator.next() {
			return HttpResponse::InternalServerError().body(e.to_string());
		}
		count += 1;
	}

	HttpResponse::Ok().body(count.to_string())
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the permutation endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Logging is configured through `RUST_LOG` (env_logger).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	HttpServer::new(|| {
		App::new()
			.service(get_permutations)
			.service(get_count)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
