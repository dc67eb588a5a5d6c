//! Export serialization.
//!
//! The engine produces two artifact kinds: quoted CSV text for the PF and
//! ESI reports, and a geometric page layout for payslips. Actual file
//! download and PDF rasterization are external collaborators that consume
//! these outputs.

mod csv;
mod payslip_layout;

pub use csv::{esi_report_csv, pf_report_csv, report_filename};
pub use payslip_layout::{
    PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, PayslipDocument, PayslipPage, PayslipSlot, Rect,
    SLIPS_PER_PAGE, SlipRegions, layout_payslips,
};
