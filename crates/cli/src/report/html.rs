// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML document writer.

use std::fmt::{self, Write};

use crate::model::{Scenario, Story};

/// Size estimation constants for pre-allocation.
const HTML_BASE_SIZE: usize = 1200; // Template + CSS
const HTML_TABLE_SIZE: usize = 160;
const HTML_ROW_SIZE: usize = 120;

/// Stylesheet embedded in the report head.
const CSS: &str = r#"table {
      border-collapse: collapse;
    }
    table tr th,
    table tr td {
      border: 1px solid black;
      padding: 0.2em;
    }
    table th {
      text-align: left;
      background-color: #f2f2f2;
      border-bottom: 2px solid black;
    }
    table:not(:nth-child(2)) {
      margin-top: 1em;
    }
    span {
      font-weight: bold;
    }
    .success,
    .passed {
      color: green;
    }
    .failed {
      color: red;
    }
    .skipped,
    .pending,
    .undefined {
      color: gray;
    }"#;

pub(super) fn render(stories: &[Story]) -> String {
    let tables: usize = stories.iter().map(|s| s.scenarios.len()).sum();
    let rows: usize = stories.iter().flat_map(|s| &s.scenarios).map(|s| s.steps.len()).sum();
    let mut output =
        String::with_capacity(HTML_BASE_SIZE + tables * HTML_TABLE_SIZE + rows * HTML_ROW_SIZE);
    // fmt::Write into a String cannot fail.
    let _ = write_document(&mut output, stories);
    output
}

fn write_document(out: &mut impl Write, stories: &[Story]) -> fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta http-equiv="X-UA-Compatible" content="IE=edge">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Gherkin Report</title>
  <style>
    {CSS}
  </style>
</head>
<body>
"#
    )?;

    for story in stories {
        writeln!(out, "  <div>")?;
        writeln!(out, "    <h1>{}</h1>", escape(&story.name))?;
        for scenario in &story.scenarios {
            write_scenario(out, scenario)?;
        }
        writeln!(out, "  </div>")?;
    }

    write!(out, "</body>\n</html>")
}

fn write_scenario(out: &mut impl Write, scenario: &Scenario) -> fmt::Result {
    let (class, label) = if scenario.failed { ("failed", "FAILED") } else { ("success", "SUCCESS") };

    writeln!(out, "    <table>")?;
    writeln!(out, "      <tr>")?;
    writeln!(out, "        <th>Scenario: {}</th>", escape(&scenario.name))?;
    writeln!(out, r#"        <th><span class="{class}">{label}</span></th>"#)?;
    writeln!(out, "      </tr>")?;
    for step in &scenario.steps {
        writeln!(out, "      <tr>")?;
        writeln!(out, "        <td>{}</td>", escape(&step.readable))?;
        writeln!(
            out,
            r#"        <td><span class="{}">{}</span></td>"#,
            step.status.css_class(),
            step.status.label()
        )?;
        writeln!(out, "      </tr>")?;
    }
    writeln!(out, "    </table>")
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
