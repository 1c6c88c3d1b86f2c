use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::ReportConfig;

use super::domain::{
    honorific_label, CertificateStatus, MaritalRecord, MarriageKind, MarriageRecord, Owner,
    PriorMarriageEnd, SingleStatus, TransactionContext,
};
use super::temporal::{completed_years, format_date};

const RULE: &str = "--------------------------------------------------";

/// Plain-text guidance sheet: declared facts, numbered outcomes and disclaimer.
pub fn render_text_report(
    context: &TransactionContext,
    narratives: &[String],
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    render(&mut out, context, narratives, config).expect("write guidance report");
    out
}

fn render(
    out: &mut String,
    context: &TransactionContext,
    narratives: &[String],
    config: &ReportConfig,
) -> std::fmt::Result {
    write_header(out, context, config)?;
    write_facts(out, context)?;
    write_results(out, narratives)?;
    write_footer(out, config)
}

fn write_header(
    out: &mut String,
    context: &TransactionContext,
    config: &ReportConfig,
) -> std::fmt::Result {
    writeln!(out, "{}", config.office_name)?;
    writeln!(out, "PHIẾU HƯỚNG DẪN HỒ SƠ BAN ĐẦU (CÁ NHÂN)")?;
    writeln!(out)?;
    writeln!(
        out,
        "Ngày hướng dẫn: {}",
        format_date(context.guidance_date)
    )?;
    writeln!(out, "{RULE}\nI. THÔNG TIN KÊ KHAI\n{RULE}")
}

fn write_facts(out: &mut String, context: &TransactionContext) -> std::fmt::Result {
    writeln!(
        out,
        "1. Loại giao dịch: {}",
        context.transaction_type.map(|kind| kind.label()).unwrap_or_default()
    )?;
    writeln!(
        out,
        "2. Giấy chứng nhận: {}",
        context.certificate.map(|status| status.label()).unwrap_or_default()
    )?;

    if context.certificate != Some(CertificateStatus::Issued) {
        return Ok(());
    }

    writeln!(
        out,
        "3. Nguồn gốc tài sản: {}",
        context.property_origin.map(|origin| origin.label()).unwrap_or_default()
    )?;
    writeln!(
        out,
        "4. Ngày sở hữu: {}",
        format_date(context.acquisition_date)
    )?;
    writeln!(
        out,
        "5. Thế chấp: {}",
        context.mortgage.map(|status| status.label()).unwrap_or_default()
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "6. Danh sách chủ sở hữu ({} người):",
        context.owner_count.unwrap_or(context.owners.len())
    )?;
    for (index, owner) in context.owners.iter().enumerate() {
        write_owner(out, index + 1, owner, context.guidance_date)?;
    }

    Ok(())
}

fn write_owner(
    out: &mut String,
    position: usize,
    owner: &Owner,
    today: Option<NaiveDate>,
) -> std::fmt::Result {
    write!(
        out,
        "  - CSH {position}: {} {} (Sinh: {})",
        owner.honorific_label(),
        owner.name,
        format_date(owner.birth_date)
    )?;
    if owner.birth_date.is_some() && today.is_some() {
        write!(out, " - {} tuổi", completed_years(owner.birth_date, today))?;
    }
    writeln!(out)?;

    match &owner.marital {
        Some(MaritalRecord::Single { status }) => {
            writeln!(out, "    + Tình trạng: Độc thân")?;
            if let Some(status) = status {
                writeln!(out, "    + Chi tiết: {}", status.label())?;
                match status {
                    SingleStatus::NeverMarried => {}
                    SingleStatus::Divorced(ending) => {
                        if ending.date.is_some() {
                            writeln!(out, "    + Ngày ly hôn: {}", format_date(ending.date))?;
                        }
                        if ending.former_spouse.name.is_some() {
                            writeln!(
                                out,
                                "    + Vợ/chồng cũ (Ly hôn): {}",
                                ending.former_spouse.display()
                            )?;
                        }
                    }
                    SingleStatus::Widowed(ending) => {
                        if ending.date.is_some() {
                            writeln!(
                                out,
                                "    + Ngày vợ/chồng chết: {}",
                                format_date(ending.date)
                            )?;
                        }
                        if ending.former_spouse.name.is_some() {
                            writeln!(
                                out,
                                "    + Vợ/chồng cũ (Đã mất): {}",
                                ending.former_spouse.display()
                            )?;
                        }
                    }
                }
            }
        }
        Some(MaritalRecord::Married(record)) => {
            writeln!(out, "    + Tình trạng: Đang có vợ/chồng")?;
            write_marriage(out, record)?;
        }
        None => writeln!(out, "    + Tình trạng: Chưa kê khai")?,
    }

    Ok(())
}

fn write_marriage(out: &mut String, record: &MarriageRecord) -> std::fmt::Result {
    writeln!(
        out,
        "    + Ngày ĐK kết hôn: {}",
        format_date(record.marriage_date)
    )?;
    writeln!(
        out,
        "    + Vợ/chồng hiện tại: {} {}",
        honorific_label(record.current_spouse.honorific),
        record.current_spouse.name.as_deref().unwrap_or("N/A")
    )?;

    let prior_end = match &record.marriage_type {
        Some(MarriageKind::First) => {
            return writeln!(out, "    + Loại kết hôn: Lần đầu");
        }
        Some(MarriageKind::Subsequent { prior_end }) => {
            writeln!(out, "    + Loại kết hôn: Không phải lần đầu")?;
            prior_end
        }
        None => return Ok(()),
    };

    let (reason, date_label, ending) = match prior_end {
        Some(PriorMarriageEnd::Divorce(ending)) => ("Ly hôn", "Ngày ly hôn trước", ending),
        Some(PriorMarriageEnd::Death(ending)) => {
            ("Vợ/chồng chết", "Ngày vợ/chồng trước chết", ending)
        }
        None => return Ok(()),
    };

    writeln!(out, "    + Lý do chấm dứt lần trước: {reason}")?;
    if ending.date.is_some() {
        writeln!(out, "    + {date_label}: {}", format_date(ending.date))?;
    }
    if ending.former_spouse.name.is_some() {
        writeln!(
            out,
            "    + Vợ/chồng trước: {}",
            ending.former_spouse.display()
        )?;
    }

    Ok(())
}

fn write_results(out: &mut String, narratives: &[String]) -> std::fmt::Result {
    writeln!(out, "\n{RULE}\nII. KẾT QUẢ HƯỚNG DẪN\n{RULE}\n")?;
    if narratives.is_empty() {
        return writeln!(out, "Không có hướng dẫn cụ thể.");
    }
    for (index, narrative) in narratives.iter().enumerate() {
        writeln!(out, "[MỤC {}]\n{narrative}\n", index + 1)?;
    }
    Ok(())
}

fn write_footer(out: &mut String, config: &ReportConfig) -> std::fmt::Result {
    writeln!(out, "{RULE}\n[GHI CHÚ QUAN TRỌNG]")?;
    writeln!(
        out,
        "Nội dung hướng dẫn nêu trên chỉ mang TÍNH CHẤT THAM KHẢO dựa trên dữ liệu Quý khách cung cấp."
    )?;
    writeln!(
        out,
        "Quý khách vui lòng liên hệ trực tiếp cán bộ nghiệp vụ để được hướng dẫn chi tiết."
    )?;
    writeln!(
        out,
        "PHIÊN BẢN HƯỚNG DẪN HỒ SƠ CÔNG CHỨNG CỦA {} - PHIÊN BẢN {}.",
        config.office_name, config.edition
    )
}
