//! Payslip page layout.
//!
//! A pure geometric partition of a fixed physical page into three equal
//! vertical bands, one payslip per band. Each band is sub-partitioned into
//! a header strip, an employee-info strip, a two-column
//! earnings/deductions table, a boxed net-pay line, and a footer that
//! carries the generation timestamp and statutory account numbers. The
//! renderer that draws the regions is an external collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::MonthSpan;
use crate::models::PayslipFigures;

/// Page width in points (A4 portrait).
pub const PAGE_WIDTH: f64 = 595.28;
/// Page height in points (A4 portrait).
pub const PAGE_HEIGHT: f64 = 841.89;
/// Uniform page margin in points.
pub const PAGE_MARGIN: f64 = 24.0;
/// Payslips per physical page.
pub const SLIPS_PER_PAGE: usize = 3;

const HEADER_HEIGHT: f64 = 26.0;
const INFO_HEIGHT: f64 = 38.0;
const NET_PAY_HEIGHT: f64 = 22.0;
const FOOTER_HEIGHT: f64 = 18.0;

/// An axis-aligned region on the page, in points, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

/// The sub-regions of one payslip band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlipRegions {
    /// The whole band.
    pub band: Rect,
    /// Company/report header strip.
    pub header: Rect,
    /// Employee name, number, and position strip.
    pub employee_info: Rect,
    /// Left table column: earnings lines.
    pub earnings_column: Rect,
    /// Right table column: deduction lines.
    pub deductions_column: Rect,
    /// Boxed net-pay line.
    pub net_pay_box: Rect,
    /// Footer: generation timestamp and PF/ESI account numbers.
    pub footer: Rect,
}

/// One placed payslip: its band geometry plus the figures to print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipSlot {
    /// Where the slip sits on its page.
    pub regions: SlipRegions,
    /// What the renderer prints in it.
    pub figures: PayslipFigures,
}

/// One physical page of up to [`SLIPS_PER_PAGE`] payslips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipPage {
    /// 1-based page number.
    pub number: u32,
    /// The slips placed on this page, top to bottom.
    pub slips: Vec<PayslipSlot>,
}

/// The laid-out payslip document for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipDocument {
    /// The selected month, formatted as `YYYY-MM`.
    pub month: String,
    /// When the document was generated; printed in every slip footer.
    pub generated_at: DateTime<Utc>,
    /// The pages, in input order.
    pub pages: Vec<PayslipPage>,
}

/// Places payslip figures three-per-page in input order.
pub fn layout_payslips(
    span: &MonthSpan,
    figures: Vec<PayslipFigures>,
    generated_at: DateTime<Utc>,
) -> PayslipDocument {
    let pages = figures
        .chunks(SLIPS_PER_PAGE)
        .enumerate()
        .map(|(page_index, chunk)| PayslipPage {
            number: page_index as u32 + 1,
            slips: chunk
                .iter()
                .enumerate()
                .map(|(slot, figures)| PayslipSlot {
                    regions: slip_regions(slot),
                    figures: figures.clone(),
                })
                .collect(),
        })
        .collect();

    PayslipDocument {
        month: span.to_string(),
        generated_at,
        pages,
    }
}

/// Computes the fixed sub-regions of the band at `slot` (0-based, top down).
fn slip_regions(slot: usize) -> SlipRegions {
    let band_height = (PAGE_HEIGHT - 2.0 * PAGE_MARGIN) / SLIPS_PER_PAGE as f64;
    let x = PAGE_MARGIN;
    let width = PAGE_WIDTH - 2.0 * PAGE_MARGIN;
    let top = PAGE_MARGIN + slot as f64 * band_height;

    let table_height =
        band_height - HEADER_HEIGHT - INFO_HEIGHT - NET_PAY_HEIGHT - FOOTER_HEIGHT;
    let table_top = top + HEADER_HEIGHT + INFO_HEIGHT;
    let column_width = width / 2.0;

    SlipRegions {
        band: Rect {
            x,
            y: top,
            width,
            height: band_height,
        },
        header: Rect {
            x,
            y: top,
            width,
            height: HEADER_HEIGHT,
        },
        employee_info: Rect {
            x,
            y: top + HEADER_HEIGHT,
            width,
            height: INFO_HEIGHT,
        },
        earnings_column: Rect {
            x,
            y: table_top,
            width: column_width,
            height: table_height,
        },
        deductions_column: Rect {
            x: x + column_width,
            y: table_top,
            width: column_width,
            height: table_height,
        },
        net_pay_box: Rect {
            x,
            y: table_top + table_height,
            width,
            height: NET_PAY_HEIGHT,
        },
        footer: Rect {
            x,
            y: table_top + table_height + NET_PAY_HEIGHT,
            width,
            height: FOOTER_HEIGHT,
        },
    }
}
