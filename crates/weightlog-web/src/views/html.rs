//! Built-in HTML renderer.

use weightlog_core::config::ViewsConfig;
use weightlog_core::error::AppError;
use weightlog_core::result::AppResult;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::Weight;

use super::{View, ViewData, ViewModel, ViewRenderer};
use crate::dto::WeightForm;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
tfoot td{font-weight:bold}\
.error{background:#fdecea;border:1px solid #f5c2c0;color:#8a1f17;padding:.6rem;margin-bottom:1rem}\
label{display:block;margin:.6rem 0 .2rem}\
.actions{margin-top:1rem;display:flex;gap:1rem;align-items:center}";

/// Renders the weight pages as self-contained HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    /// Build the renderer from configuration.
    pub fn new(config: &ViewsConfig) -> Self {
        Self {
            title: config.title.clone(),
        }
    }

    fn layout(&self, heading: &str, error: Option<&str>, content: &str) -> String {
        let title = escape(&self.title);
        let banner = error
            .map(|message| format!("<p class=\"error\">{}</p>", escape(message)))
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title} | {heading}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
             <header><a href=\"/\"><strong>{title}</strong></a></header>\n\
             <h1>{heading}</h1>\n{banner}\n{content}\n</body>\n</html>\n"
        )
    }

    fn index(&self, weights: &[Weight], model: &ViewModel) -> String {
        let mut rows = String::new();
        if weights.is_empty() {
            rows.push_str("<tr><td colspan=\"4\">No weights recorded yet.</td></tr>\n");
        }
        for weight in weights {
            rows.push_str(&format!(
                "<tr><td><a href=\"/weight/{id}\">{date}</a></td><td>{max}</td><td>{min}</td><td>{diff}</td></tr>\n",
                id = weight.id,
                date = escape(&weight.date),
                max = weight.max,
                min = weight.min,
                diff = weight.difference,
            ));
        }

        format!(
            "<p><a href=\"/weight/new\">Add weight</a></p>\n\
             <table>\n<thead><tr><th>Date</th><th>Max</th><th>Min</th><th>Difference</th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n\
             <tfoot><tr><td>Average</td><td>{max}</td><td>{min}</td><td>{diff}</td></tr></tfoot>\n</table>",
            max = escape(&model.average_max),
            min = escape(&model.average_min),
            diff = escape(&model.average_diff),
        )
    }

    fn detail(&self, weight: &Weight) -> String {
        format!(
            "<dl>\n<dt>Date</dt><dd>{date}</dd>\n<dt>Max</dt><dd>{max}</dd>\n\
             <dt>Min</dt><dd>{min}</dd>\n<dt>Difference</dt><dd>{diff}</dd>\n</dl>\n\
             <div class=\"actions\">\n<a href=\"/weight/{id}/edit\">Edit</a>\n\
             <form method=\"post\" action=\"/weight/{id}/delete\"><button type=\"submit\">Delete</button></form>\n\
             <a href=\"/\">Back to list</a>\n</div>",
            id = weight.id,
            date = escape(&weight.date),
            max = weight.max,
            min = weight.min,
            diff = weight.difference,
        )
    }

    fn form(&self, action: &str, submit: &str, values: &WeightForm, back: &str) -> String {
        format!(
            "<form method=\"post\" action=\"{action}\">\n\
             <label for=\"date\">Date</label>\n\
             <input type=\"date\" id=\"date\" name=\"date\" value=\"{date}\" required>\n\
             <label for=\"max\">Max</label>\n\
             <input type=\"number\" id=\"max\" name=\"max\" min=\"1\" value=\"{max}\" required>\n\
             <label for=\"min\">Min</label>\n\
             <input type=\"number\" id=\"min\" name=\"min\" min=\"1\" value=\"{min}\" required>\n\
             <div class=\"actions\"><button type=\"submit\">{submit}</button><a href=\"{back}\">Cancel</a></div>\n\
             </form>",
            date = escape(&values.date),
            max = escape(&values.max),
            min = escape(&values.min),
        )
    }

    fn edit(&self, id: WeightId, values: &WeightForm) -> String {
        self.form(
            &format!("/weight/{id}/update"),
            "Save",
            values,
            &format!("/weight/{id}"),
        )
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: View, model: &ViewModel) -> AppResult<String> {
        let (heading, content) = match (view, &model.data) {
            (View::Index, ViewData::List(weights)) => ("Weights", self.index(weights, model)),
            (View::Index, ViewData::Empty) => ("Weights", self.index(&[], model)),
            (View::Detail, ViewData::Record(weight)) => ("Weight detail", self.detail(weight)),
            (View::New, ViewData::Form { values, .. }) => (
                "New weight",
                self.form("/weight/insert", "Create", values, "/"),
            ),
            (View::New, ViewData::Empty) => (
                "New weight",
                self.form("/weight/insert", "Create", &WeightForm::default(), "/"),
            ),
            (View::Edit, ViewData::Form { id: Some(id), values }) => {
                ("Edit weight", self.edit(*id, values))
            }
            (View::Edit, ViewData::Record(weight)) => {
                ("Edit weight", self.edit(weight.id, &WeightForm::from(weight)))
            }
            (view, _) => {
                return Err(AppError::render(format!(
                    "{view} cannot be rendered from the given data"
                )));
            }
        };

        Ok(self.layout(heading, model.error.as_deref(), &content))
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
