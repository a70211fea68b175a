//! Metrics for the Cupertino surfaces.
//!
//! Defaults are the iOS values. Everything is in logical pixels except
//! `device_pixel_ratio` and `text_scale_factor`. Missing JSON fields fall back
//! to the defaults.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, hairline_thickness};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetMetrics {
    pub edge_horizontal_padding: f32,
    pub edge_vertical_padding: f32,
    pub cancel_button_padding: f32,
    pub button_height: f32,
    pub corner_radius: f32,
    pub cancel_corner_radius: f32,
    /// Hairline width in physical pixels; divided by the device pixel ratio.
    pub divider_thickness: f32,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            edge_horizontal_padding: 8.0,
            edge_vertical_padding: 10.0,
            cancel_button_padding: 8.0,
            button_height: 56.0,
            corner_radius: 12.0,
            cancel_corner_radius: 14.0,
            divider_thickness: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMetrics {
    pub width: f32,
    pub accessibility_width: f32,
    /// Text scale factors above this switch the dialog to accessibility mode.
    pub max_regular_text_scale: f32,
    pub inset_horizontal: f32,
    pub inset_vertical: f32,
    pub edge_padding: f32,
    pub min_button_height: f32,
    pub corner_radius: f32,
    pub divider_thickness: f32,
}

impl Default for DialogMetrics {
    fn default() -> Self {
        Self {
            width: 270.0,
            accessibility_width: 310.0,
            max_regular_text_scale: 1.4,
            inset_horizontal: 40.0,
            inset_vertical: 24.0,
            edge_padding: 20.0,
            min_button_height: 45.0,
            corner_radius: 12.0,
            divider_thickness: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CupertinoConfig {
    pub device_pixel_ratio: f32,
    pub text_scale_factor: f32,
    pub sheet: SheetMetrics,
    pub dialog: DialogMetrics,
}

impl Default for CupertinoConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            text_scale_factor: 1.0,
            sheet: SheetMetrics::default(),
            dialog: DialogMetrics::default(),
        }
    }
}

fn check(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMetric { name, value })
    }
}

impl CupertinoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CupertinoConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "loaded config: dpr {}, text scale {}",
            config.device_pixel_ratio,
            config.text_scale_factor
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        hairline_thickness(self.device_pixel_ratio)?;
        if !self.text_scale_factor.is_finite() || self.text_scale_factor <= 0.0 {
            return Err(Error::InvalidTextScale(self.text_scale_factor));
        }

        let s = &self.sheet;
        check("sheet.edge_horizontal_padding", s.edge_horizontal_padding)?;
        check("sheet.edge_vertical_padding", s.edge_vertical_padding)?;
        check("sheet.cancel_button_padding", s.cancel_button_padding)?;
        check("sheet.button_height", s.button_height)?;
        check("sheet.corner_radius", s.corner_radius)?;
        check("sheet.cancel_corner_radius", s.cancel_corner_radius)?;
        if !s.divider_thickness.is_finite() || s.divider_thickness < 0.0 {
            return Err(Error::InvalidDividerThickness(s.divider_thickness));
        }

        let d = &self.dialog;
        check("dialog.width", d.width)?;
        check("dialog.accessibility_width", d.accessibility_width)?;
        check("dialog.max_regular_text_scale", d.max_regular_text_scale)?;
        check("dialog.inset_horizontal", d.inset_horizontal)?;
        check("dialog.inset_vertical", d.inset_vertical)?;
        check("dialog.edge_padding", d.edge_padding)?;
        check("dialog.min_button_height", d.min_button_height)?;
        check("dialog.corner_radius", d.corner_radius)?;
        if !d.divider_thickness.is_finite() || d.divider_thickness < 0.0 {
            return Err(Error::InvalidDividerThickness(d.divider_thickness));
        }
        Ok(())
    }

    /// Sheet hairline in logical pixels for the configured device.
    pub fn sheet_divider_thickness(&self) -> Result<f32> {
        Ok(self.sheet.divider_thickness * hairline_thickness(self.device_pixel_ratio)?)
    }

    pub fn dialog_divider_thickness(&self) -> Result<f32> {
        Ok(self.dialog.divider_thickness * hairline_thickness(self.device_pixel_ratio)?)
    }

    pub fn is_accessibility_mode(&self) -> bool {
        self.text_scale_factor > self.dialog.max_regular_text_scale
    }
}
