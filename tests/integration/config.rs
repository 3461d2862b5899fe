// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use indoc::indoc;
use ndarray::prelude::*;

use phased_array::{ArrayConfig, ConfigFormat, LayoutError, PhasedArrayError};

use super::*;

#[test]
fn config_to_pattern() -> Result<(), PhasedArrayError> {
    let contents = indoc! {r#"
        wavelength = 2.0

        [layout]
        type = "uniform_linear"
        spacing = 1.0
        count = 8

        [steer]
        theta = 0.5235987755982988
        phi = 0.0
    "#};
    let format = ConfigFormat::from_extension("toml")?;
    let config = ArrayConfig::parse(contents, format)?;
    let geometry = config.geometry()?;
    let weights = config.weights(&geometry)?;

    let theta = degrees(-90.0, 90.0, 181);
    let phi = Array1::<f64>::zeros(181);
    let af = geometry.array_factor(config.wavelength, &weights, &theta, &phi)?;
    let (i_max, _) = af
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
        .unwrap();
    assert_abs_diff_eq!(theta[i_max], 30.0_f64.to_radians(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn config_round_trips_between_formats() -> Result<(), PhasedArrayError> {
    let contents = r#"{
        "wavelength": 1.5,
        "layout": {"type": "planar", "spacing_x": 0.75, "spacing_y": 0.5, "count_x": 4, "count_y": 2}
    }"#;
    let from_json = ArrayConfig::parse(contents, ConfigFormat::Json)?;
    let toml = from_json.serialise(ConfigFormat::Toml)?;
    let from_toml = ArrayConfig::parse(&toml, ConfigFormat::Toml)?;
    assert_eq!(from_json, from_toml);
    assert!(from_toml.steer.is_none());
    assert_eq!(from_toml.geometry()?.len(), 8);
    Ok(())
}

#[test]
fn unknown_extension() {
    let result = ConfigFormat::from_extension("yml").map_err(PhasedArrayError::from);
    assert!(matches!(
        result,
        Err(PhasedArrayError::Layout(LayoutError::UnknownFormat { .. }))
    ));
}
