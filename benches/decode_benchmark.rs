use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use serde_json::{json, Value};

use mvcat::catalog::decode_movies;

const NUM_MOVIES: usize = 1000;

fn movie_list() -> Vec<Value> {
    (0..NUM_MOVIES)
        .map(|i| {
            // Every other record carries the misspelled genre field.
            let genre_field = if i % 2 == 0 { "genre" } else { "gener" };
            json!({
                "_id": format!("m{}", i),
                "title": format!("Movie {}", i),
                "director": "Someone",
                "year": 1990 + (i % 30) as i32,
                "description": "A movie about benchmarks",
                genre_field: "Sci-Fi",
                "poster": "http://example.com/p.jpg",
                "comments": [
                    { "_id": format!("c{}", i), "userId": "u1", "comment": "ok" },
                ],
            })
        })
        .collect()
}

pub fn decode_wrapped(c: &mut Criterion) {
    let body = json!({ "movies": movie_list() });

    // Clone in the setup closure so only the decode is measured.
    c.bench_function("decode_movies_wrapped", |b| {
        b.iter_batched(
            || body.clone(),
            |body| decode_movies(body).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

pub fn decode_bare(c: &mut Criterion) {
    let body = Value::Array(movie_list());

    c.bench_function("decode_movies_bare", |b| {
        b.iter_batched(
            || body.clone(),
            |body| decode_movies(body).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, decode_wrapped, decode_bare);
criterion_main!(benches);
