use irongithub_api::ApiError;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented JSON.
    Pretty,
    /// One JSON document per line.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Pretty,
        }
    }
}

pub fn print_json<T: Serialize>(data: &T, format: &OutputFormat) {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data),
        OutputFormat::Json => serde_json::to_string(data),
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// The API failure behind a command error, if it was one.
pub fn api_error_of(err: &anyhow::Error) -> Option<&ApiError> {
    err.downcast_ref::<irongithub_api::Error>()
        .and_then(irongithub_api::Error::as_api_error)
}

pub fn print_api_error(err: &ApiError) {
    eprintln!("{}", describe_api_error(err));
}

fn describe_api_error(err: &ApiError) -> String {
    let payload = err.payload();
    let mut lines = vec![format!("{} ({})", err, err.response().url())];
    for field in &payload.errors {
        let detail = field.message.as_deref().unwrap_or(&field.code);
        lines.push(format!("  {}.{}: {}", field.resource, field.field, detail));
    }
    if let Some(url) = &payload.documentation_url {
        lines.push(format!("See {}", url));
    }
    lines.join("\n")
}
