use urlview::Url;

fn main() {
    let mut url = Url::parse("https://search.example.com/results?q=rust&page=2&safe");

    println!("Query: {}", url.querys()); // q=rust&page=2&safe
    println!("Assignments: {}", url.query_count()); // 2

    // Indexed access rescans the query on every call
    for index in 0..url.query_count() {
        println!("query_at({index}): {}", url.query_at(index));
    }

    // Iterate every segment, split at the first '='
    for (key, value) in url.query_pairs() {
        println!("{key} => {value:?}");
    }

    // In-place edits go through `edit` so the views are recomputed
    url.edit(|text| text.push_str("&lang=en"));
    println!("Segments: {:?}", url.query_segments().collect::<Vec<_>>());
    // ["q=rust", "page=2", "safe", "lang=en"]
}
