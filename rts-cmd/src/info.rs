use anyhow::{Context, Result};
use rts::{Decoder, Header, Summary};
use serde::Serialize;
use std::{
    io::{stdout, Write},
    path::Path,
};

use crate::decode::{read_message, registry, Format};

#[derive(Debug, Clone, Serialize)]
struct Info {
    filename: String,
    time: Option<String>,
    header: Header,
    summary: Summary,
}

fn summarize(fpath: &Path, decoder: Decoder) -> Result<Info> {
    let message = read_message(fpath, decoder)?;
    Ok(Info {
        filename: fpath.to_string_lossy().to_string(),
        time: message.time().map(|t| t.to_rfc3339()),
        header: message.header,
        summary: Summary::from(&message),
    })
}

pub fn info(fpath: &Path, format: &Format, decoder: Decoder) -> Result<()> {
    let info = summarize(fpath, decoder)?;

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(stdout(), &info).context("serializing to json")
        }
        Format::Text => {
            let data = render_text(&info).context("serializing info")?;
            stdout()
                .write_all(str::as_bytes(&data))
                .context("writing to stdout")
        }
    }
}

fn render_text(info: &Info) -> Result<String> {
    registry("info", TEXT_TEMPLATE)?
        .render("info", &info)
        .context("rendering text")
}

const TEXT_TEMPLATE: &str = r"{{ filename }}
==================================================================
Time:          {{ time }}
Version:       {{ header.version }}
Stations:      {{ summary.stations }}
Alerts:        {{ summary.alerts }}
Areas:         {{ summary.areas }}
Max intensity: {{ summary.max_intensity }}
Max PGA:       {{ summary.max_pga }}
Max PGV:       {{ summary.max_pgv }}
Max area:      {{ summary.max_area_intensity }}
";
