use anyhow::{Context, Result};
use handlebars::handlebars_helper;
use rts::{Decoder, Message};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

#[derive(Debug, Serialize)]
struct Decoded<'a> {
    filename: String,
    time: Option<String>,
    message: &'a Message,
}

/// Decode a single message from the file at `fpath`.
pub fn read_message(fpath: &Path, decoder: Decoder) -> Result<Message> {
    let src = File::open(fpath).with_context(|| format!("opening input {fpath:?}"))?;
    let message = decoder
        .read(src)
        .with_context(|| format!("decoding {fpath:?}"))?;
    debug!(
        stations = message.stations.len(),
        areas = message.area_intensities.len(),
        "decoded message"
    );
    Ok(message)
}

pub fn decode<W: Write>(fpath: &Path, mut dest: W, format: &Format, decoder: Decoder) -> Result<()> {
    let message = read_message(fpath, decoder)?;

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut dest, &message).context("serializing to json")
        }
        Format::Text => {
            let decoded = Decoded {
                filename: fpath.to_string_lossy().to_string(),
                time: message.time().map(|t| t.to_rfc3339()),
                message: &message,
            };
            let data = render_text(&decoded).context("serializing message")?;
            dest.write_all(data.as_bytes()).context("writing output")
        }
    }
}

handlebars_helper!(left_pad: |num: u64, v: Json| {
    let v = match v {
        serde_json::Value::String(s) => s.to_owned(),
        serde_json::Value::Null => String::new(),
        _ => v.to_string()
    };
    let num = usize::try_from(num).unwrap_or_default().max(v.len());
    format!("{v:>num$}")
});

/// Handlebars registry with the `lpad` helper and `template` registered as `name`.
pub fn registry(name: &str, template: &str) -> Result<handlebars::Handlebars<'static>> {
    let mut hb = handlebars::Handlebars::new();
    hb.register_helper("lpad", Box::new(left_pad));
    hb.register_template_string(name, template)
        .context("registering template")?;
    Ok(hb)
}

fn render_text(decoded: &Decoded) -> Result<String> {
    registry("decode", TEXT_TEMPLATE)?
        .render("decode", decoded)
        .context("rendering text")
}

const TEXT_TEMPLATE: &str = r"{{ filename }}
==================================================================
Version:  {{ message.header.version }}
Time:     {{ time }} ({{ message.header.timestamp_ms }})
Stations: {{ message.header.station_count }}
Areas:    {{ message.header.int_count }}
Reserved: {{ message.header.reserved }}
------------------------------------------------------------------
Station              PGA          PGV   Intensity   Alert
------------------------------------------------------------------
{{ #each message.stations }}{{ lpad 10 id }}  {{ lpad 11 pga }}  {{ lpad 11 pgv }}  {{ lpad 10 intensity }}   {{ lpad 5 is_alert }}
{{/each }}------------------------------------------------------------------
Area    Intensity
------------------------------------------------------------------
{{ #each message.area_intensities }}{{ lpad 6 code }}  {{ lpad 9 intensity }}
{{/each }}";
