// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write per-source XML model files.

use std::{fs::File, io::BufWriter, path::Path};

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, Event},
    Writer,
};

use super::super::{
    error::WriteArchiveError,
    paths::path_to_xmlpath,
    spatial::derive_spatial_parameters,
    types::{ParameterRecord, SourceRecord, SpatialFunction},
};

/// Write the XML model document for one source, pretty-printed with 2-space
/// indentation. The parent directory of `path` must already exist.
pub(crate) fn write_source_xml(
    path: &Path,
    name: &str,
    record: &SourceRecord,
) -> Result<(), WriteArchiveError> {
    let spectral_params = record.spectral_parameters()?;
    let spatial_params = derive_spatial_parameters(record)?;

    let file = BufWriter::new(File::create(path)?);
    let mut writer = Writer::new_with_indent(file, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("source_library");
    root.push_attribute(("title", "source_library"));
    writer.write_event(Event::Start(root))?;

    let mut source = BytesStart::new("source");
    source.push_attribute(("name", name));
    source.push_attribute(("type", "DiffuseSource"));
    writer.write_event(Event::Start(source))?;

    let mut spectrum = BytesStart::new("spectrum");
    spectrum.push_attribute(("type", record.spectral_function.as_str()));
    writer.write_event(Event::Start(spectrum))?;
    for (param_name, param) in spectral_params {
        writer.write_event(Event::Empty(parameter_element(param_name, param)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("spectrum")))?;

    let mut spatial = BytesStart::new("spatialModel");
    spatial.push_attribute(("type", record.spatial_function.to_string().as_str()));
    if record.spatial_function == SpatialFunction::SpatialMap {
        let filename = record.spatial_filename.as_deref().ok_or_else(|| {
            WriteArchiveError::MissingSpatialFilename {
                source_name: record.source_name.clone(),
            }
        })?;
        spatial.push_attribute(("file", path_to_xmlpath(filename).as_str()));
        spatial.push_attribute(("map_based_integral", "true"));
    }
    writer.write_event(Event::Start(spatial))?;
    for (param_name, param) in &spatial_params {
        writer.write_event(Event::Empty(parameter_element(param_name, param)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("spatialModel")))?;

    writer.write_event(Event::End(BytesEnd::new("source")))?;
    writer.write_event(Event::End(BytesEnd::new("source_library")))?;

    Ok(())
}

/// Render a parameter record as a self-closing `parameter` element.
/// Numeric attributes are only written when finite; the `free` flag is
/// rendered as "0"/"1".
fn parameter_element(name: &str, param: &ParameterRecord) -> BytesStart<'static> {
    let mut elem = BytesStart::new("parameter");

    if let Some(free) = param.free {
        elem.push_attribute(("free", free.to_string().as_str()));
    }
    push_finite(&mut elem, "max", param.max);
    push_finite(&mut elem, "min", param.min);
    elem.push_attribute(("name", param.name.as_deref().unwrap_or(name)));
    push_finite(&mut elem, "scale", Some(param.scale));
    push_finite(&mut elem, "value", Some(param.value));
    push_finite(&mut elem, "error", param.error);

    elem
}

fn push_finite(elem: &mut BytesStart, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        if v.is_finite() {
            elem.push_attribute((key, v.to_string().as_str()));
        }
    }
}
