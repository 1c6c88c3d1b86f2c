use crate::guide::render_guidance;
use crate::infra::guidance_sheet;
use chrono::NaiveDate;
use clap::Args;
use deed_guidance::config::ReportConfig;
use deed_guidance::error::AppError;
use deed_guidance::guidance::temporal::{add_years, format_date, parse_date};
use deed_guidance::guidance::{parse_fact_sheet, render_text_report, validate_all};
use serde_json::{json, Value};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the guidance date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full plain-text guidance sheet for each household.
    #[arg(long)]
    pub(crate) report: bool,
}

struct Household {
    title: &'static str,
    sheet: Value,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, report } = args;
    let today = today.unwrap_or_else(crate::infra::today);

    println!("Deed guidance demo ({})", format_date(Some(today)));

    for household in sample_households(today) {
        println!("\n=== {} ===", household.title);
        let context = parse_fact_sheet(&household.sheet.to_string())?;
        validate_all(&context)?;

        let sheet = guidance_sheet(&context);
        if report {
            print!(
                "{}",
                render_text_report(&context, &sheet.narratives, &ReportConfig::default())
            );
        } else {
            render_guidance(&sheet);
        }
    }

    Ok(())
}

fn iso(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn sample_households(today: NaiveDate) -> Vec<Household> {
    let guidance_date = iso(Some(today));
    let child_birth = iso(add_years(Some(today), -12));

    vec![
        Household {
            title: "Remarried owner and a co-owning child",
            sheet: json!({
                "guidanceDate": guidance_date,
                "transactionType": "mua_ban_khac",
                "hasCertificate": "co",
                "numberOfOwners": 2,
                "propertyOrigin": "nhan_chuyen_nhuong",
                "propertyOwnershipDate": "2015-06-01",
                "isMortgaged": "dang_the_chap",
                "isSecured": "khong",
                "hasFinancialDebt": "khong",
                "owners": [
                    {
                        "id": 1,
                        "name": "Nguyễn Văn An",
                        "gender": "ong",
                        "birthDate": "1975-04-12",
                        "marital": {
                            "status": "co_vo_chong",
                            "marriageDate": "2018-09-01",
                            "currentSpouse": { "name": "Trần Thị Bình", "gender": "ba" },
                            "marriageType": {
                                "kind": "khong_phai_lan_dau",
                                "priorEnd": {
                                    "reason": "ly_hon",
                                    "date": "2012-03-20",
                                    "formerSpouse": { "name": "Lê Thị Cúc", "gender": "ba" }
                                }
                            }
                        }
                    },
                    {
                        "id": 2,
                        "name": "Nguyễn Minh Đức",
                        "gender": "ong",
                        "birthDate": child_birth,
                        "marital": { "status": "doc_than", "single": { "type": "chua_ket_hon" } }
                    }
                ]
            }),
        },
        Household {
            title: "Widow gifting a flat bought during her marriage",
            sheet: json!({
                "guidanceDate": guidance_date,
                "transactionType": "tang_cho",
                "hasCertificate": "co",
                "numberOfOwners": 1,
                "propertyOrigin": "nha_nuoc_cong_nhan",
                "propertyOwnershipDate": "2008-11-15",
                "isMortgaged": "khong_the_chap",
                "isSecured": "co",
                "hasFinancialDebt": "co",
                "owners": [{
                    "id": 1,
                    "name": "Phạm Thị Hoa",
                    "gender": "ba",
                    "birthDate": "1960-02-29",
                    "marital": {
                        "status": "doc_than",
                        "single": {
                            "type": "vo_chong_chet",
                            "date": "2019-07-07",
                            "formerSpouse": { "name": "Đỗ Văn Hùng", "gender": "ong" }
                        }
                    }
                }]
            }),
        },
        Household {
            title: "Property without a certificate",
            sheet: json!({
                "guidanceDate": guidance_date,
                "transactionType": "mua_ban_khac",
                "hasCertificate": "khong"
            }),
        },
    ]
}
