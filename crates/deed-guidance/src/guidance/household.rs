use tracing::debug;

use super::domain::{Answer, MortgageStatus, TransactionContext};
use super::narrative::Narrative;
use super::outcome::{HouseholdAdvisory, HouseholdFlag};

/// Independent administrative checks, appended in the order
/// mortgage, secured transaction, tax debt.
pub fn evaluate_household(context: &TransactionContext) -> Vec<HouseholdAdvisory> {
    let mut advisories = Vec::new();

    if context.mortgage == Some(MortgageStatus::Mortgaged) {
        advisories.push(mortgage_release());
    }

    if context.secured_transaction == Some(Answer::Yes) {
        advisories.push(secured_transaction_clearance());
    }

    if context.tax_debt == Some(Answer::Yes) {
        advisories.push(tax_debt_block());
    }

    debug!(count = advisories.len(), "household flags evaluated");
    advisories
}

fn mortgage_release() -> HouseholdAdvisory {
    let narrative = Narrative::headline("PL#_1: GIAICHAP")
        .bullet("Cần bổ sung Văn bản giải chấp của bên Nhận thế chấp.")
        .arrow("Liên hệ với Ngân hàng để có Văn bản giải chấp (sau khi trả hết nợ).");

    HouseholdAdvisory {
        flag: HouseholdFlag::MortgageReleaseNeeded,
        narrative: narrative.build(),
    }
}

fn secured_transaction_clearance() -> HouseholdAdvisory {
    let narrative = Narrative::headline("PL#_2: XOA_GDBĐ")
        .bullet("CÓ THỂ theo yêu cầu của một số Văn phòng đăng ký đất đai")
        .line("  thì PHẢI TIẾN HÀNH XOÁ ĐĂNG KÝ GIAO DỊCH BẢO ĐẢM")
        .line("  MỚI ĐƯỢC THỰC HIỆN GIAO DỊCH.")
        .arrow("Liên hệ với VPĐK ĐẤT ĐAI để xoá đăng ký GDBĐ trên GCN QSDĐ/QSHN.");

    HouseholdAdvisory {
        flag: HouseholdFlag::SecuredTransactionClearanceNeeded,
        narrative: narrative.build(),
    }
}

fn tax_debt_block() -> HouseholdAdvisory {
    let narrative = Narrative::headline("PL#_3: NO_TSDĐ")
        .bullet("Hiện tại CHƯA THỂ thực hiện được giao dịch.")
        .line("  Lý do: vẫn còn đang nợ nghĩa vụ tài chính.")
        .arrow("Liên hệ với Cơ quan thuế để hoàn tất nghĩa vụ tài chính;")
        .arrow("Liên hệ với VPĐK ĐẤT ĐAI để đăng ký xoá ghi nợ trên GCN QSDĐ/QSHN.");

    HouseholdAdvisory {
        flag: HouseholdFlag::TaxDebtBlocking,
        narrative: narrative.build(),
    }
}
