use groupfeed::{
    config::GroupConfig,
    error::Result,
    format::Formatter,
    merge::merge,
    parser::ArxivClient,
    storage::LocalSaver,
};

fn main() -> Result<()> {
    let config = GroupConfig::from_env();
    let descriptors = config.load_queries()?;

    // fetch every saved search in configuration order, one at a time
    let client = ArxivClient::new();
    let mut batches = Vec::new();
    for descriptor in &descriptors {
        let (_metadata, papers) = client.fetch(descriptor)?;
        batches.push(papers);
    }

    let papers = merge(batches);
    println!("# unique papers: {}", papers.len());

    let html = Formatter::to_group_html(&papers, &config.render_options());
    LocalSaver::save_group_feed_html(&config.output_file, &html)?;
    Ok(())
}
