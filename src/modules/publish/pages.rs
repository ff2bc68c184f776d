/// A generated HTML document and the object key it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    pub file_name: &'static str,
    pub body: String,
}

pub const INDEX_PAGE: &str = "index.html";
pub const ERROR_PAGE: &str = "error.html";

/// Public URL of the landing page in `bucket`.
pub fn public_index_url(bucket: &str) -> String {
    format!("https://s3.amazonaws.com/{}/{}", bucket, INDEX_PAGE)
}

/// Player page for the transcoded output.
pub fn landing_page(output_key: &str) -> StaticPage {
    let body = format!(
        concat!(
            "<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n",
            "<title>Elastic Transcoder Test</title>\n",
            "</head>\n",
            "<body>\n",
            "<h1>Elastic Transcoder Test</h1>\n",
            "<video width=\"1280\" height=\"720\" controls>\n",
            " <source src=\"{}\" type=\"video/mp4\">\n",
            " Your browser does not support HTML5 video.\n",
            "</video>\n",
            "</body></html>\n",
        ),
        escape_attr(output_key)
    );

    StaticPage {
        file_name: INDEX_PAGE,
        body,
    }
}

/// Error document pointing back at the landing page.
pub fn error_page(output_bucket: &str) -> StaticPage {
    let body = format!(
        concat!(
            "<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n",
            "<title>Error</title>\n",
            "</head>\n",
            "<body>\n",
            "<h1>Error!</h1>\n",
            "<p>Click <a href=\"{}\">here</a> to go back to the main page.</p>\n",
            "</body></html>\n",
        ),
        escape_attr(&public_index_url(output_bucket))
    );

    StaticPage {
        file_name: ERROR_PAGE,
        body,
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
