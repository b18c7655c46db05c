// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read spectral parameters back out of per-source XML files.

use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use quick_xml::{events::BytesStart, Reader};

use super::super::{error::ReadArchiveError, types::ParameterRecord};

/// Parse the XML model document at `path` and return its
/// `source/spectrum/parameter` elements as an ordered map keyed by each
/// parameter's `name` attribute. Only the first `source` element is
/// considered; a document without one is an error.
pub(crate) fn read_spectral_parameters(
    path: &Path,
) -> Result<IndexMap<String, ParameterRecord>, ReadArchiveError> {
    let mut reader = Reader::from_file(path).map_err(|err| ReadArchiveError::Xml {
        path: path.to_path_buf(),
        err,
    })?;
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut params = IndexMap::new();
    let mut found_source = false;
    let mut in_source = false;
    let mut in_spectrum = false;

    loop {
        use quick_xml::events::Event;
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"source" if !found_source => {
                    found_source = true;
                    in_source = true;
                }
                b"spectrum" if in_source => {
                    in_spectrum = true;
                    if let Some(spectral_type) = attribute_value(path, &e, b"type")? {
                        debug!("{}: spectrum type {spectral_type}", path.display());
                    }
                }
                b"parameter" if in_spectrum => {
                    let (name, param) = parse_parameter(path, &e, params.len())?;
                    params.insert(name, param);
                }
                _ => (),
            },
            // Self-closing elements never get an End event, so they must not
            // toggle the nesting flags; a <spectrum/> has no parameters.
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"source" if !found_source => found_source = true,
                b"parameter" if in_spectrum => {
                    let (name, param) = parse_parameter(path, &e, params.len())?;
                    params.insert(name, param);
                }
                _ => (),
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"spectrum" if in_spectrum => in_spectrum = false,
                // Done once the first source closes.
                b"source" if in_source => break,
                _ => (),
            },
            Ok(Event::Eof) => break,
            Ok(_) => (),
            Err(err) => {
                return Err(ReadArchiveError::Xml {
                    path: path.to_path_buf(),
                    err,
                })
            }
        }
        buf.clear();
    }

    if !found_source {
        return Err(ReadArchiveError::MissingSource {
            path: path.to_path_buf(),
        });
    }

    Ok(params)
}

/// Build a typed parameter record from a `parameter` element's attributes.
/// `name`, `value` and `scale` are required; everything else is optional.
fn parse_parameter(
    path: &Path,
    elem: &BytesStart,
    index: usize,
) -> Result<(String, ParameterRecord), ReadArchiveError> {
    let name = attribute_value(path, elem, b"name")?.ok_or_else(|| {
        ReadArchiveError::MissingParameterName {
            path: path.to_path_buf(),
            index,
        }
    })?;

    let value = required_f64(path, elem, &name, "value")?;
    let scale = required_f64(path, elem, &name, "scale")?;
    let error = optional_f64(path, elem, &name, "error")?;
    let min = optional_f64(path, elem, &name, "min")?;
    let max = optional_f64(path, elem, &name, "max")?;
    // "free" is written as 0/1 but be lenient about "0.0".
    let free = optional_f64(path, elem, &name, "free")?.map(|f| (f != 0.0) as u8);

    let param = ParameterRecord {
        name: Some(name.clone()),
        value,
        error,
        scale,
        free,
        min,
        max,
    };
    Ok((name, param))
}

/// The unescaped value of an attribute, if the element has it.
fn attribute_value(
    path: &Path,
    elem: &BytesStart,
    key: &[u8],
) -> Result<Option<String>, ReadArchiveError> {
    for attr in elem.attributes() {
        let attr = attr.map_err(|err| ReadArchiveError::Xml {
            path: path.to_path_buf(),
            err: err.into(),
        })?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(|err| ReadArchiveError::Xml {
                path: path.to_path_buf(),
                err,
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn optional_f64(
    path: &Path,
    elem: &BytesStart,
    param_name: &str,
    attribute: &'static str,
) -> Result<Option<f64>, ReadArchiveError> {
    match attribute_value(path, elem, attribute.as_bytes())? {
        None => Ok(None),
        Some(string) => string.parse::<f64>().map(Some).map_err(|_| {
            ReadArchiveError::ParseParameterAttribute {
                path: path.to_path_buf(),
                name: param_name.to_string(),
                attribute: attribute.to_string(),
                string,
            }
        }),
    }
}

fn required_f64(
    path: &Path,
    elem: &BytesStart,
    param_name: &str,
    attribute: &'static str,
) -> Result<f64, ReadArchiveError> {
    optional_f64(path, elem, param_name, attribute)?.ok_or_else(|| {
        ReadArchiveError::MissingParameterAttribute {
            path: path.to_path_buf(),
            name: param_name.to_string(),
            attribute,
        }
    })
}
