//! HTML for the browser upload flow.

use crate::config::UPLOAD_FIELD;
use crate::stats::Analysis;

pub fn index_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Term statistics</title><link rel="stylesheet" href="/static/style.css"></head>
<body>
<h1>Upload a text document</h1>
<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="{UPLOAD_FIELD}" required>
<button type="submit">Analyze</button>
</form>
</body>
</html>
"#
    )
}

pub fn result_page(filename: &str, analysis: &Analysis) -> String {
    let mut rows = String::new();
    for stat in &analysis.terms {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.4}</td></tr>\n",
            escape(&stat.term),
            stat.frequency,
            stat.score
        ));
    }
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Term statistics</title><link rel="stylesheet" href="/static/style.css"></head>
<body>
<h1>{filename}</h1>
<p>{total} tokens, {distinct} distinct terms</p>
<table>
<tr><th>Term</th><th>TF</th><th>IDF</th></tr>
{rows}</table>
<p><a href="/">Upload another file</a></p>
</body>
</html>
"#,
        filename = escape(filename),
        total = analysis.total_tokens,
        distinct = analysis.distinct_terms,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TermStat;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn result_page_lists_terms() {
        let analysis = Analysis {
            total_tokens: 3,
            distinct_terms: 2,
            terms: vec![
                TermStat {
                    term: "b".to_string(),
                    frequency: 1,
                    score: 3f64.ln(),
                },
                TermStat {
                    term: "a".to_string(),
                    frequency: 2,
                    score: 1.5f64.ln(),
                },
            ],
        };
        let page = result_page("<doc>.txt", &analysis);
        assert!(page.contains("&lt;doc&gt;.txt"));
        assert!(page.contains("<tr><td>b</td><td>1</td><td>1.0986</td></tr>"));
        assert!(page.contains("<tr><td>a</td><td>2</td><td>0.4055</td></tr>"));
        assert!(page.find("<td>b</td>") < page.find("<td>a</td>"));
    }
}
