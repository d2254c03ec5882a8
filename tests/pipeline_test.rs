use httpmock::prelude::*;

use groupfeed::{
    config::QueryDescriptor,
    format::{Formatter, RenderOptions},
    merge::merge,
    parser::ArxivClient,
    storage::LocalSaver,
};

fn stub_feed(total_results: u32, entries: &[(&str, &str)]) -> String {
    let mut body = format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<feed xmlns=\"http://www.w3.org/2005/Atom\" ",
            "xmlns:opensearch=\"http://a9.com/-/spec/opensearch/1.1/\" ",
            "xmlns:arxiv=\"http://arxiv.org/schemas/atom\">\n",
            "  <title type=\"html\">ArXiv Query stub</title>\n",
            "  <updated>2024-01-03T00:00:00-05:00</updated>\n",
            "  <opensearch:totalResults>{}</opensearch:totalResults>\n",
            "  <opensearch:startIndex>0</opensearch:startIndex>\n",
            "  <opensearch:itemsPerPage>{}</opensearch:itemsPerPage>\n"
        ),
        total_results,
        entries.len()
    );
    for (title, published) in entries {
        body.push_str(&format!(
            concat!(
                "  <entry>\n",
                "    <id>http://arxiv.org/abs/{title}</id>\n",
                "    <published>{published}</published>\n",
                "    <title>{title}</title>\n",
                "    <summary>stub</summary>\n",
                "    <author><name>Jane Doe</name></author>\n",
                "  </entry>\n"
            ),
            title = title,
            published = published
        ));
    }
    body.push_str("</feed>\n");
    body
}

fn descriptor(query: &str, start: u32, max_entries: u32) -> QueryDescriptor {
    QueryDescriptor {
        query: query.to_string(),
        start,
        max_entries,
    }
}

#[test]
fn test_single_query_end_to_end() {
    let server = MockServer::start();
    let feed = stub_feed(2, &[("A", "2024-01-02"), ("B", "2024-01-01")]);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/query")
            .query_param("search_query", "all:electron")
            .query_param("start", "0")
            .query_param("max_results", "2");
        then.status(200)
            .header("content-type", "application/atom+xml")
            .body(&feed);
    });

    let client = ArxivClient::with_base_url(&server.url("/api/query"));
    let (metadata, papers) = client
        .fetch(&descriptor("all:electron", 0, 2))
        .expect("stub fetch failed");
    mock.assert();

    assert_eq!(metadata.total_results, "2");
    assert_eq!(metadata.items_per_page, "2");
    assert_eq!(papers.len(), 2);

    let merged = merge(vec![papers]);
    let html = Formatter::to_group_html(&merged, &RenderOptions::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arxiv_group_feed.html");
    LocalSaver::save_group_feed_html(path.to_str().unwrap(), &html).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, html);

    // one definition list, two numbered items, newest title first
    assert_eq!(written.matches("<dl>").count(), 1);
    assert_eq!(written.matches("<dt>[").count(), 2);
    let first = written.find("\t\t\tA\n").expect("title A missing");
    let second = written.find("\t\t\tB\n").expect("title B missing");
    assert!(first < second);

    // neither entry carried a journal reference or DOI
    assert!(!written.contains("Journal ref:"));
    assert!(!written.contains("DOI:"));
}

#[test]
fn test_two_queries_merge_and_dedup_across_batches() {
    let server = MockServer::start();
    let first_feed = stub_feed(
        2,
        &[("Only in one", "2024-01-03"), ("Shared result", "2024-01-02")],
    );
    let second_feed = stub_feed(1, &[("Shared result", "2024-01-04")]);
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/query")
            .query_param("search_query", "cat:cs.CL");
        then.status(200).body(&first_feed);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/query")
            .query_param("search_query", "cat:cs.LG");
        then.status(200).body(&second_feed);
    });

    let client = ArxivClient::with_base_url(&server.url("/api/query"));
    let descriptors = vec![descriptor("cat:cs.CL", 0, 10), descriptor("cat:cs.LG", 0, 10)];

    let mut batches = Vec::new();
    for d in &descriptors {
        let (_metadata, papers) = client.fetch(d).expect("stub fetch failed");
        batches.push(papers);
    }
    assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), 3);

    let merged = merge(batches);
    assert_eq!(merged.len(), 2);
    // the duplicate with the greater timestamp string won
    assert_eq!(merged[0].title, "Shared result");
    assert_eq!(merged[0].published, "2024-01-04");
    assert_eq!(merged[1].title, "Only in one");

    let html = Formatter::to_group_html(&merged, &RenderOptions::default());
    assert_eq!(html.matches("<dt>[").count(), 2);
    let shared = html.find("\t\t\tShared result\n").unwrap();
    let single = html.find("\t\t\tOnly in one\n").unwrap();
    assert!(shared < single);
}

#[test]
fn test_http_failure_is_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/query");
        then.status(500).body("exporter down");
    });

    let client = ArxivClient::with_base_url(&server.url("/api/query"));
    assert!(client.fetch(&descriptor("all:electron", 0, 2)).is_err());
}

#[test]
fn test_garbage_body_is_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/query");
        then.status(200).body("<html>not a feed");
    });

    let client = ArxivClient::with_base_url(&server.url("/api/query"));
    assert!(client.fetch(&descriptor("all:electron", 0, 2)).is_err());
}
