//! HID digitizer backend.
//!
//! Opens touch screens that enumerate on the HID Digitizer usage page (`0x0D`) and
//! decodes their input reports with a fixed [`ReportLayout`]. Descriptor parsing is
//! not attempted; pick (or configure) the layout that matches the panel's firmware.
//!
//! Reads never block. Every call to [`TouchSource::sample_touch`] drains whatever
//! reports are queued and returns the newest state; with nothing queued the previous
//! state is repeated. Read errors are logged and treated the same way.

use crate::device::{TouchSample, TouchSource};
use crate::error::Result;
use hidapi::{DeviceInfo, HidApi, HidDevice};
use serde::{Deserialize, Serialize};

/// HID usage page for digitizers.
pub const DIGITIZER_USAGE_PAGE: u16 = 0x0D;

/// Upper bound on reports drained per sample so a chatty device cannot stall the loop.
const MAX_REPORTS_PER_SAMPLE: usize = 32;

/// Byte positions of the touch fields inside one input report.
///
/// Offsets index the buffer returned by `hidapi`, which starts with the report id
/// for devices that use numbered reports. Coordinates and force are little-endian
/// 16-bit values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    /// Only reports starting with this id are decoded.
    pub report_id: Option<u8>,
    pub tip_byte: usize,
    pub tip_mask: u8,
    pub x_offset: usize,
    pub y_offset: usize,
    pub force_offset: Option<usize>,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            report_id: None,
            tip_byte: 1,
            tip_mask: 0x01,
            x_offset: 2,
            y_offset: 4,
            force_offset: None,
        }
    }
}

impl ReportLayout {
    /// Decodes one report.
    ///
    /// Returns `None` when the report is not ours (wrong id or too short),
    /// `Some(None)` when the tip switch is off, `Some(Some(sample))` while touched.
    pub fn decode(&self, report: &[u8]) -> Option<Option<TouchSample>> {
        if let Some(id) = self.report_id {
            if report.first() != Some(&id) {
                return None;
            }
        }

        let tip = *report.get(self.tip_byte)?;
        let x = read_i16(report, self.x_offset)?;
        let y = read_i16(report, self.y_offset)?;
        let force = match self.force_offset {
            Some(off) => read_i16(report, off)?,
            None => 0,
        };

        if tip & self.tip_mask == 0 {
            return Some(None);
        }
        Some(Some(TouchSample::with_force(x, y, force)))
    }
}

fn read_i16(buf: &[u8], offset: usize) -> Option<i16> {
    let bytes = buf.get(offset..offset.checked_add(2)?)?;
    Some(i16::from_le_bytes([bytes[0], bytes[1]]))
}

pub struct HidTouchSource {
    id: String,
    name: String,
    raw: HidDevice,
    layout: ReportLayout,
    current: Option<TouchSample>,
}

impl HidTouchSource {
    pub fn open(info: &DeviceInfo, api: &HidApi, layout: ReportLayout) -> Result<Self> {
        let raw = info.open_device(api)?;
        raw.set_blocking_mode(false)?;
        Ok(Self {
            id: format!("hid:{:04x}:{:04x}", info.vendor_id(), info.product_id()),
            name: info.product_string().unwrap_or("Unknown digitizer").to_string(),
            raw,
            layout,
            current: None,
        })
    }
}

impl TouchSource for HidTouchSource {
    fn sample_touch(&mut self) -> Option<TouchSample> {
        let mut buf = [0u8; 64];
        for _ in 0..MAX_REPORTS_PER_SAMPLE {
            match self.raw.read_timeout(&mut buf, 0) {
                Ok(0) => break,
                Ok(size) => {
                    if let Some(state) = self.layout.decode(&buf[..size]) {
                        self.current = state;
                    }
                }
                Err(e) => {
                    log::warn!("{} read error: {e}", self.name);
                    break;
                }
            }
        }
        self.current
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Opens every digitizer interface `hidapi` can see. Devices that fail to open are
/// logged and skipped.
pub fn probe_digitizers(api: &HidApi, layout: &ReportLayout) -> Vec<HidTouchSource> {
    let mut found = Vec::new();
    for info in api.device_list() {
        if info.usage_page() != DIGITIZER_USAGE_PAGE {
            continue;
        }
        match HidTouchSource::open(info, api, layout.clone()) {
            Ok(dev) => {
                log::debug!("opened digitizer {} ({})", dev.name, dev.id);
                found.push(dev);
            }
            Err(e) => log::warn!(
                "skipping digitizer {:04x}:{:04x}: {e}",
                info.vendor_id(),
                info.product_id()
            ),
        }
    }
    found
}
