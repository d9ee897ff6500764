//! Server-rendered play-history report.
//!
//! A plain HTML table of every logged play, newest first. This is a
//! debugging aid for the parent, not an API surface.

use crate::history_store::HistoryRecord;

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_history_report(records: &[HistoryRecord]) -> String {
    let mut rows = String::new();
    if records.is_empty() {
        rows.push_str("      <tr><td colspan=\"3\" class=\"empty\">No records found</td></tr>\n");
    } else {
        for record in records {
            rows.push_str(&format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                record.id,
                escape_html(&record.video_name),
                escape_html(&record.played_at)
            ));
        }
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"UTF-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
           <title>VideoKids play history</title>\n\
           <style>\n\
             body {{ font-family: sans-serif; background: #f3f4f6; margin: 2rem; }}\n\
             table {{ border-collapse: collapse; width: 100%; background: #fff; }}\n\
             th {{ background: #16a34a; color: #fff; text-align: left; }}\n\
             th, td {{ padding: 0.5rem 1rem; border-bottom: 1px solid #e5e7eb; }}\n\
             .empty {{ text-align: center; color: #6b7280; }}\n\
           </style>\n\
         </head>\n\
         <body>\n\
           <h1>VideoKids play history</h1>\n\
           <table>\n\
             <thead>\n\
               <tr><th>ID</th><th>Video name</th><th>Date and time</th></tr>\n\
             </thead>\n\
             <tbody>\n{}\
             </tbody>\n\
           </table>\n\
         </body>\n\
         </html>\n",
        rows
    )
}
