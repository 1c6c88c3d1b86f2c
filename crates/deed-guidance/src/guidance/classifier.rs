use tracing::{debug, warn};

use super::domain::{
    MaritalRecord, MarriageEnding, MarriageKind, MarriageRecord, Owner, PriorMarriageEnd,
    PropertyOrigin, SingleStatus, TransactionContext,
};
use super::guards::{
    acquired_before_marriage, acquired_between_marriages, acquired_during_current_marriage,
    acquired_within_ended_marriage, at_least, ended_before_acquisition, younger_than,
    AGE_OF_MAJORITY, CONSENT_AGE, CO_SIGN_AGE,
};
use super::narrative::Narrative;
use super::outcome::{Classification, PropertyCharacter, Rule, Signer};
use super::temporal::{exact_age, format_date};

const SEPARATE: &str = "Tính chất: TÀI SẢN RIÊNG.";
const PRESENT_ORIGINALS: &str = "Phải xuất trình bản chính:";
const CERTIFICATE_QSHN: &str = "GCN QSDĐ/QSHN.";
const CERTIFICATE_QSH: &str = "GCN QSDĐ/QSH.";
const MARRIAGE_CERTIFICATE: &str = "Giấy chứng nhận đăng ký kết hôn;";

/// Run the ordered decision tree for one owner. The first matching rule wins.
pub fn classify(owner: &Owner, context: &TransactionContext) -> Classification {
    let verdict = decide(owner, context);

    if verdict.rule == Rule::NoApplicableRule {
        warn!(owner = owner.id, "no classification rule matched owner facts");
    } else {
        debug!(owner = owner.id, rule = ?verdict.rule, "owner classified");
    }

    Classification {
        owner_id: owner.id,
        owner_name: owner.name.clone(),
        rule: verdict.rule,
        category: verdict.rule.category(),
        character: verdict.character,
        signers: verdict.signers,
        narrative: verdict.narrative,
    }
}

struct Verdict {
    rule: Rule,
    character: Option<PropertyCharacter>,
    signers: Vec<Signer>,
    narrative: String,
}

impl Verdict {
    fn separate(rule: Rule, narrative: Narrative) -> Self {
        Self {
            rule,
            character: Some(PropertyCharacter::Separate),
            signers: vec![Signer::Owner],
            narrative: narrative.build(),
        }
    }
}

fn decide(owner: &Owner, context: &TransactionContext) -> Verdict {
    let today = context.guidance_date;
    let birth = owner.birth_date;

    if younger_than(birth, today, AGE_OF_MAJORITY) && context.is_gift() {
        return gift_to_minor(owner);
    }

    if younger_than(birth, today, CO_SIGN_AGE) {
        return under_nine(owner);
    }

    if at_least(birth, today, CO_SIGN_AGE) && younger_than(birth, today, CONSENT_AGE) {
        return nine_to_fifteen(owner, &exact_age(birth, today));
    }

    if at_least(birth, today, CONSENT_AGE) && younger_than(birth, today, AGE_OF_MAJORITY) {
        return fifteen_to_eighteen(owner, &exact_age(birth, today));
    }

    if at_least(birth, today, AGE_OF_MAJORITY) {
        if let Some(verdict) = decide_adult(owner, context) {
            return verdict;
        }
    }

    no_applicable_rule(owner)
}

fn decide_adult(owner: &Owner, context: &TransactionContext) -> Option<Verdict> {
    let acquired = context.acquisition_date;
    let subject = subject(owner);

    let never_married = matches!(
        owner.marital,
        Some(MaritalRecord::Single {
            status: Some(SingleStatus::NeverMarried)
        })
    );
    let inherited = context.property_origin == Some(PropertyOrigin::GiftOrInheritance);
    if never_married || inherited {
        return Some(never_married_or_inherited(&subject, inherited));
    }

    match owner.marital.as_ref()? {
        MaritalRecord::Single {
            status: Some(SingleStatus::Divorced(ending)),
        } => {
            if ended_before_acquisition(ending.date, acquired) {
                return Some(divorced_before_acquisition(&subject, ending));
            }
            if acquired_within_ended_marriage(acquired, ending.date) {
                return Some(acquired_before_divorce(&subject, ending));
            }
            None
        }
        MaritalRecord::Single {
            status: Some(SingleStatus::Widowed(ending)),
        } => {
            if ended_before_acquisition(ending.date, acquired) {
                return Some(widowed_before_acquisition(&subject, ending));
            }
            if acquired_within_ended_marriage(acquired, ending.date) {
                return Some(acquired_before_spouse_death(&subject, ending));
            }
            None
        }
        MaritalRecord::Single { .. } => None,
        MaritalRecord::Married(record) => decide_married(&subject, record, context),
    }
}

fn decide_married(
    subject: &str,
    record: &MarriageRecord,
    context: &TransactionContext,
) -> Option<Verdict> {
    let acquired = context.acquisition_date;
    let married_on = record.marriage_date;
    if married_on.is_none() {
        return None;
    }

    if record.marriage_type == Some(MarriageKind::First)
        && acquired_before_marriage(acquired, married_on)
    {
        return Some(acquired_before_first_marriage(subject, record));
    }

    if acquired_during_current_marriage(married_on, acquired) {
        return Some(married_before_acquisition(subject, record));
    }

    let Some(MarriageKind::Subsequent {
        prior_end: Some(prior_end),
    }) = &record.marriage_type
    else {
        return None;
    };

    match prior_end {
        PriorMarriageEnd::Divorce(ending) => {
            if acquired_between_marriages(ending.date, acquired, married_on) {
                return Some(acquired_between_divorce_and_remarriage(
                    subject, ending, record,
                ));
            }
            if acquired_within_ended_marriage(acquired, ending.date) {
                return Some(acquired_before_prior_divorce(subject, ending));
            }
        }
        PriorMarriageEnd::Death(ending) => {
            if acquired_between_marriages(ending.date, acquired, married_on) {
                return Some(acquired_between_death_and_remarriage(
                    subject, ending, record,
                ));
            }
            if acquired_within_ended_marriage(acquired, ending.date) {
                return Some(acquired_before_prior_spouse_death(subject, ending));
            }
        }
    }

    None
}

fn subject(owner: &Owner) -> String {
    format!("{} {}", owner.honorific_label(), owner.name)
}

fn gift_to_minor(owner: &Owner) -> Verdict {
    let narrative = Narrative::new("DƯỚI 18 TUỔI- CHO TÀI SẢN", &format!("Trẻ {}", owner.name))
        .bullet(SEPARATE)
        .bullet("KHÔNG THỂ TẶNG CHO TÀI SẢN CỦA CON DƯỚI 18 TUỔI");

    Verdict {
        rule: Rule::GiftToMinor,
        character: Some(PropertyCharacter::Separate),
        signers: Vec::new(),
        narrative: narrative.build(),
    }
}

fn under_nine(owner: &Owner) -> Verdict {
    let name = &owner.name;
    let narrative = Narrative::new("DƯỚI 9 TUỔI", &format!("Trẻ {name}"))
        .bullet(SEPARATE)
        .bullet(format!("Người ký văn bản: Cha & Mẹ của trẻ {name}."))
        .arrow("Hồ sơ xuất trình bản chính:")
        .item(format!("CCCD của Cha & Mẹ trẻ {name};"))
        .item(format!("Giấy Khai sinh trẻ {name};"))
        .item(CERTIFICATE_QSH);

    Verdict {
        rule: Rule::UnderNine,
        character: Some(PropertyCharacter::Separate),
        signers: vec![Signer::Parents],
        narrative: narrative.build(),
    }
}

fn nine_to_fifteen(owner: &Owner, age: &str) -> Verdict {
    let name = &owner.name;
    let narrative = Narrative::new(&format!("{age} tuổi"), &format!("Trẻ {name}"))
        .bullet(SEPARATE)
        .bullet(format!("Người ký văn bản: Cha & Mẹ của trẻ {name}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD của Cha & Mẹ trẻ {name};"))
        .item(format!("Giấy Khai sinh trẻ {name};"))
        .item(format!("Văn bản đồng ý của trẻ {name} (chứng nội dung)"))
        .cont(format!("HOẶC CCCD của trẻ {name} (ký chung);"))
        .item(CERTIFICATE_QSH);

    Verdict {
        rule: Rule::NineToFifteen,
        character: Some(PropertyCharacter::Separate),
        signers: vec![Signer::Parents, Signer::Minor],
        narrative: narrative.build(),
    }
}

fn fifteen_to_eighteen(owner: &Owner, age: &str) -> Verdict {
    let name = &owner.name;
    let narrative = Narrative::new(&format!("{age} tuổi"), &format!("Trẻ {name}"))
        .bullet(SEPARATE)
        .bullet(format!("Người ký văn bản: trẻ {name}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD của trẻ {name};"))
        .item(format!("Giấy Khai sinh trẻ {name};"))
        .item("CCCD của Cha & Mẹ (ký chung)")
        .cont("HOẶC Văn bản đồng ý của Cha Mẹ (chứng nội dung);")
        .item(CERTIFICATE_QSH);

    Verdict {
        rule: Rule::FifteenToEighteen,
        character: Some(PropertyCharacter::Separate),
        signers: vec![Signer::Minor, Signer::Parents],
        narrative: narrative.build(),
    }
}

fn sole_signer(tag: &str, subject: &str) -> Narrative {
    Narrative::new(tag, subject)
        .bullet(SEPARATE)
        .bullet(format!("Người ký văn bản: {subject}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD của {subject};"))
}

fn never_married_or_inherited(subject: &str, inherited: bool) -> Verdict {
    let narrative = sole_signer("ĐỘC THÂN//CHƯA_KH//GỐC TẶNG CHO//THỪA KẾ", subject)
        .item(CERTIFICATE_QSHN)
        .notes();

    let narrative = if inherited {
        narrative
            .line("Tài sản có nguồn gốc thừa kế/nhận tặng cho, CẦN xuất trình:")
            .star("Văn bản tặng cho/Văn bản thừa kế.")
    } else {
        narrative.certificate_span(format!(
            "từ khi {subject} đủ tuổi kết hôn đến nay (là chưa kết hôn);"
        ))
    };

    Verdict::separate(Rule::NeverMarriedOrInherited, narrative)
}

fn divorced_before_acquisition(subject: &str, ending: &MarriageEnding) -> Verdict {
    let narrative = sole_signer("ĐỘC THÂN//LH→SH", subject)
        .item(format!("Giấy xác nhận tình trạng hôn nhân của {subject};"))
        .item(CERTIFICATE_QSHN)
        .notes()
        .certificate_span(format!(
            "từ ngày ly hôn (ngày {}) đến nay (là chưa kết hôn lại);",
            format_date(ending.date)
        ));

    Verdict::separate(Rule::DivorcedBeforeAcquisition, narrative)
}

fn widowed_before_acquisition(subject: &str, ending: &MarriageEnding) -> Verdict {
    let narrative = sole_signer("ĐỘC THÂN//DIE→SH", subject)
        .item(format!("Giấy xác nhận tình trạng hôn nhân của {subject};"))
        .item(CERTIFICATE_QSHN)
        .notes()
        .certificate_span(format!(
            "từ ngày vợ/chồng cũ chết (ngày {}) đến nay;",
            format_date(ending.date)
        ));

    Verdict::separate(Rule::WidowedBeforeAcquisition, narrative)
}

fn acquired_before_divorce(subject: &str, ending: &MarriageEnding) -> Verdict {
    let former = ending.former_spouse.display();
    let narrative = Narrative::new("ĐỘC THÂN//SH→LH", subject)
        .bullet(format!("Tính chất: TÀI SẢN CHUNG với {former}."))
        .bullet(format!("Người ký văn bản: {subject}."))
        .bullet(format!("Người ký cùng: {former}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD {subject};"))
        .item(format!("CCCD {former};"))
        .item("Bản án ly hôn;")
        .item(CERTIFICATE_QSHN)
        .notes()
        .line("Ông/bà vui lòng liên hệ trực tiếp nếu:")
        .numbered(1, "Bản án ly hôn ĐÃ CHIA tài sản này")
        .cont("HOẶC tài sản được tạo lập TRƯỚC thời kỳ hôn nhân;")
        .numbered(
            2,
            "Bản án ly hôn không ghi rõ thời điểm kết hôn của hôn nhân ban đầu,",
        )
        .cont("có thể cần bổ sung trích lục kết hôn cũ.");

    Verdict {
        rule: Rule::AcquiredBeforeDivorce,
        character: Some(PropertyCharacter::Joint),
        signers: vec![Signer::Owner, Signer::FormerSpouse(former)],
        narrative: narrative.build(),
    }
}

fn estate_division(rule: Rule, narrative: Narrative, contact: &str, deceased: &str) -> Verdict {
    let narrative = narrative
        .notes()
        .line(format!("Ông/bà vui lòng liên hệ trực tiếp để được hướng dẫn {contact},"))
        .line("đồng thời xuất trình:")
        .item(format!("Giấy chứng nhận kết hôn với {deceased};"))
        .item(format!("Giấy chứng tử của {deceased}."));

    Verdict {
        rule,
        character: Some(PropertyCharacter::PossiblyJoint),
        signers: vec![Signer::Owner, Signer::Heirs],
        narrative: narrative.build(),
    }
}

fn acquired_before_spouse_death(subject: &str, ending: &MarriageEnding) -> Verdict {
    let deceased = ending.former_spouse.display();
    let narrative = Narrative::new("ĐỘC THÂN//SH→DIE", subject)
        .bullet(format!(
            "Tính chất: CÓ KHẢ NĂNG LÀ TÀI SẢN CHUNG với {deceased}."
        ))
        .line(format!("Do {deceased} đã chết,"))
        .arrow("Phải thực hiện phân chia di sản thừa kế.")
        .arrow("Sau khi phân chia và đăng ký thay đổi chủ sở hữu,")
        .line(format!("  {subject} sẽ ký chung với các thừa kế (nếu có)."));

    estate_division(
        Rule::AcquiredBeforeSpouseDeath,
        narrative,
        "chi tiết",
        &deceased,
    )
}

fn acquired_before_first_marriage(subject: &str, record: &MarriageRecord) -> Verdict {
    let narrative = sole_signer("1_KẾT HÔN//SH→KH", subject)
        .item(format!(
            "Giấy xác nhận tình trạng hôn nhân của {subject} cho giai đoạn trước khi kết hôn;"
        ))
        .item(MARRIAGE_CERTIFICATE)
        .item(CERTIFICATE_QSHN)
        .notes()
        .certificate_span(format!(
            "từ khi {subject} đủ tuổi kết hôn đến ngày kết hôn (ngày {});",
            format_date(record.marriage_date)
        ));

    Verdict::separate(Rule::AcquiredBeforeFirstMarriage, narrative)
}

fn married_before_acquisition(subject: &str, record: &MarriageRecord) -> Verdict {
    let spouse = record.current_spouse.display();
    let narrative = Narrative::new("1&2_KẾT HÔN//KH→SH", subject)
        .bullet(format!("Tính chất: TÀI SẢN CHUNG với {spouse}."))
        .bullet(format!("Người ký văn bản: {subject}."))
        .bullet(format!("Người ký cùng: {spouse}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD của {subject};"))
        .item(format!("CCCD của {spouse};"))
        .item(MARRIAGE_CERTIFICATE)
        .item(CERTIFICATE_QSH);

    Verdict {
        rule: Rule::MarriedBeforeAcquisition,
        character: Some(PropertyCharacter::Joint),
        signers: vec![Signer::Owner, Signer::Spouse(spouse)],
        narrative: narrative.build(),
    }
}

fn between_marriages(
    tag: &str,
    rule: Rule,
    subject: &str,
    ended: &str,
    record: &MarriageRecord,
) -> Verdict {
    let remarried = format!(
        "cho đến ngày kết hôn lại (ngày {});",
        format_date(record.marriage_date)
    );
    let narrative = sole_signer(tag, subject)
        .item(format!("Giấy xác nhận tình trạng hôn nhân của {subject}"))
        .cont(format!("cho giai đoạn {ended}"))
        .cont(&remarried)
        .item(MARRIAGE_CERTIFICATE)
        .item(CERTIFICATE_QSHN)
        .notes()
        .star("Giấy xác nhận TTHN phải xác nhận đủ thời gian")
        .cont(format!("cho giai đoạn {ended}"))
        .cont(&remarried)
        .star("Giấy xác nhận TTHN phải còn hạn sử dụng 06 tháng")
        .cont("tính đến ngày nộp hồ sơ.");

    Verdict::separate(rule, narrative)
}

fn acquired_between_divorce_and_remarriage(
    subject: &str,
    ending: &MarriageEnding,
    record: &MarriageRecord,
) -> Verdict {
    between_marriages(
        "2_KẾT HÔN//LY→SH→KH",
        Rule::AcquiredBetweenDivorceAndRemarriage,
        subject,
        &format!("từ khi ly hôn (ngày {})", format_date(ending.date)),
        record,
    )
}

fn acquired_before_prior_divorce(subject: &str, ending: &MarriageEnding) -> Verdict {
    let prior = ending.former_spouse.display();
    let narrative = Narrative::new("2_KẾT HÔN//SH→LY→KH", subject)
        .bullet(format!("Tính chất: TÀI SẢN CHUNG với {prior}."))
        .bullet(format!("Người ký văn bản: {subject}."))
        .bullet(format!("Người ký cùng: {prior}."))
        .arrow(PRESENT_ORIGINALS)
        .item(format!("CCCD của {subject};"))
        .item(format!("CCCD của {prior};"))
        .item("Bản án ly hôn;")
        .item(CERTIFICATE_QSH)
        .notes()
        .line("Ông/bà vui lòng liên hệ trực tiếp để được hướng dẫn cụ thể nếu:")
        .numbered(1, "Bản án ly hôn ĐÃ chia tài sản này")
        .cont("HOẶC tài sản này có TRƯỚC thời kỳ hôn nhân với vợ/chồng cũ;")
        .numbered(2, "Bản án ly hôn không ghi cụ thể thời điểm kết hôn")
        .cont("của hôn nhân ban đầu, có thể cần bổ sung trích lục kết hôn cũ.");

    Verdict {
        rule: Rule::AcquiredBeforePriorDivorce,
        character: Some(PropertyCharacter::Joint),
        signers: vec![Signer::Owner, Signer::FormerSpouse(prior)],
        narrative: narrative.build(),
    }
}

fn acquired_between_death_and_remarriage(
    subject: &str,
    ending: &MarriageEnding,
    record: &MarriageRecord,
) -> Verdict {
    between_marriages(
        "2_KẾT HÔN//DIE→SH→KH",
        Rule::AcquiredBetweenDeathAndRemarriage,
        subject,
        &format!("từ khi vợ/chồng chết (ngày {})", format_date(ending.date)),
        record,
    )
}

fn acquired_before_prior_spouse_death(subject: &str, ending: &MarriageEnding) -> Verdict {
    let deceased = ending.former_spouse.display();
    let narrative = Narrative::new("2_KẾT HÔN//SH→DIE→KH", subject)
        .bullet(format!("Tính chất: KHẢ NĂNG TÀI SẢN CHUNG với {deceased}."))
        .line(format!("Do {deceased} đã chết,"))
        .arrow(format!(
            "Phải phân chia đối với di sản thừa kế của {deceased}."
        ))
        .arrow("Sau khi phân chia di sản và đăng ký thay đổi chủ sở hữu,")
        .line(format!(
            "  {subject} sẽ ký chung với những người thừa kế (nếu có)."
        ));

    estate_division(
        Rule::AcquiredBeforePriorSpouseDeath,
        narrative,
        "cụ thể",
        &deceased,
    )
}

fn no_applicable_rule(owner: &Owner) -> Verdict {
    let narrative = Narrative::start(format!(
        "[CẢNH BÁO] Không tìm thấy kịch bản phù hợp cho {}.",
        subject(owner)
    ))
    .line(
        "Vui lòng kiểm tra lại ngày tháng năm sinh hoặc ngày sở hữu tài sản \
         so với các mốc sự kiện (kết hôn, ly hôn, tuất).",
    );

    Verdict {
        rule: Rule::NoApplicableRule,
        character: None,
        signers: Vec::new(),
        narrative: narrative.build(),
    }
}
