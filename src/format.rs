use std::borrow::Cow;

use html_escape::encode_text;

use crate::model::Paper;

const DOI_RESOLVER: &str = "https://dx.doi.org/";

/// Rendering knobs. `max_entries == 0` renders the whole list.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub max_entries: usize,
    /// Legacy field handling: a missing journal reference drops the
    /// rest of that entry's body, DOI line and closing tags included,
    /// and a missing DOI drops the closing tags. Pages embedding the
    /// fragment may depend on those exact bytes. With `false`, optional
    /// fields render independently and every entry body is closed.
    pub legacy_truncation: bool,
    /// Entity-encode the text fields. Off by default: titles may carry
    /// markup (embedded math) that downstream pages rely on.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_entries: 50,
            legacy_truncation: true,
            escape_html: false,
        }
    }
}

// Formatter for the embeddable group feed fragment.
pub struct Formatter;

impl Formatter {
    /// Renders the merged list as a self-contained fragment: one
    /// container div wrapping one definition list.
    ///
    /// Much of the inline style is taken from https://arxiv.org/arXiv.css
    pub fn to_group_html(papers: &[Paper], options: &RenderOptions) -> String {
        let count = if options.max_entries == 0 {
            papers.len()
        } else {
            options.max_entries.min(papers.len())
        };

        let mut html =
            String::from("<div id=\"arxivcontainer\" style=margin:.7em;font-size:90%\">\n<dl>\n");
        for (index, paper) in papers[..count].iter().enumerate() {
            Self::push_entry(&mut html, index, paper, options);
        }
        html.push_str("</dl>\n</div>\n");
        html
    }

    fn push_entry(html: &mut String, index: usize, paper: &Paper, options: &RenderOptions) {
        // numeral in brackets, then the abstract link inside the identifier span
        html.push_str(&format!("<dt>[{}]&nbsp\n", index + 1));
        html.push_str(&format!(
            "\t<span class=\"list-identifier\" style=\"font-weight:bold\"><a href=\"{id}\" title=\"Abstract\">{id}</a>",
            id = paper.id
        ));
        html.push_str(concat!(
            "<dd style=\"padding-bottom:1em;\">\n",
            "\t<div class=\"meta\" style=\"line-height:130%;\">\n",
            "\t\t<div class=\"list-title\" style=\"font-size:large;font-weight:bold;margin:0.25em 0 0 0;line-height:120%\">\n"
        ));
        html.push_str(&format!(
            "\t\t\t{}\n\t\t</div>",
            text(&paper.title, options)
        ));

        let authors = format!("{}.", paper.authors.join(", "));
        html.push_str(&format!(
            "\t\t<div class=\"list-authors\" style=\"font-weight:normal;font-size:110%;text-decoration:none;\">{}</div>\n",
            text(&authors, options)
        ));

        match &paper.journal_ref {
            Some(journal_ref) => html.push_str(&format!(
                "\t\t<div class=\"list-journal-ref\" style=\"font-weight:normal;font-size:90%;\"><span class=\"descriptor\">Journal ref:</span> {}</div>",
                text(journal_ref, options)
            )),
            None if options.legacy_truncation => return,
            None => {}
        }

        // there may be multiple space separated DOIs; the whole string
        // becomes one resolver link
        match &paper.doi {
            Some(doi) => html.push_str(&format!(
                "\t\t<div class=\"list-doi\" style=\"font-weight:normal;font-size:90%;\"><span class=\"descriptor\">DOI:</span> <a href=\"{}{}\">{}</a> </div>\n",
                DOI_RESOLVER,
                doi,
                text(doi, options)
            )),
            None if options.legacy_truncation => return,
            None => {}
        }

        html.push_str("\t</div>\n</dd>");
    }
}

fn text<'a>(value: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        encode_text(value)
    } else {
        Cow::Borrowed(value)
    }
}
