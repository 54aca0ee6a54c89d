//! Plain-language score explanation

use blendscore_common::{CreditFactor, CreditGrade, CreditScoreReport, FactorId};

/// Strongest factor, weakest factor, and what the grade unlocks
///
/// Ties go to the earlier factor.
pub fn explain(report: &CreditScoreReport) -> String {
    let mut text = format!(
        "Your DeFi credit score of {} places you in the {} category.",
        report.total_score, report.grade
    );

    if let (Some(strongest), Some(weakest)) =
        (strongest(&report.factors), weakest(&report.factors))
    {
        text.push_str(&format!(
            " Your strongest area is {} at {}% of maximum points, reflecting {}.\n\n\
             Your area for improvement is {} at {}% of maximum points. {}",
            strongest.name,
            percent(strongest),
            strength(strongest),
            weakest.name,
            percent(weakest),
            improvement(weakest),
        ));
    }

    text.push_str("\n\n");
    text.push_str(grade_summary(report.grade));
    text
}

fn strongest(factors: &[CreditFactor]) -> Option<&CreditFactor> {
    factors
        .iter()
        .reduce(|best, f| if f.ratio() > best.ratio() { f } else { best })
}

fn weakest(factors: &[CreditFactor]) -> Option<&CreditFactor> {
    factors
        .iter()
        .reduce(|worst, f| if f.ratio() < worst.ratio() { f } else { worst })
}

fn percent(factor: &CreditFactor) -> i64 {
    (factor.ratio() * 100.0).round() as i64
}

fn strength(factor: &CreditFactor) -> &'static str {
    match factor.id {
        FactorId::WalletAge => "long account maturity and sustained DeFi engagement",
        FactorId::TransactionHistory => "solid on-chain activity and protocol usage",
        FactorId::RepaymentHistory => "reliable repayment and trustworthiness",
        FactorId::Collateralization => "disciplined risk management of positions",
        FactorId::LiquidationHistory => "consistent risk avoidance and capital preservation",
        FactorId::AssetDiversity => "a well-spread portfolio across assets and protocols",
        FactorId::LoanActivity => "healthy borrowing patterns and loan sizing",
    }
}

fn improvement(factor: &CreditFactor) -> &'static str {
    match factor.id {
        FactorId::WalletAge => "This grows on its own as you keep using DeFi.",
        FactorId::TransactionHistory => "Raise on-chain activity across several protocols.",
        FactorId::RepaymentHistory => "Repay every loan on time to build trust.",
        FactorId::Collateralization => "Hold higher collateral ratios and avoid risky positions.",
        FactorId::LiquidationHistory => "Monitor positions closely to avoid liquidations.",
        FactorId::AssetDiversity => "Spread over more assets and protocols to lower risk.",
        FactorId::LoanActivity => "Borrow steadily with sensible loan sizes.",
    }
}

fn grade_summary(grade: CreditGrade) -> &'static str {
    match grade {
        CreditGrade::Excellent => {
            "An EXCELLENT score unlocks the best terms: up to 90% LTV and a 3% rate \
             discount. You are in the top tier of DeFi borrowers."
        }
        CreditGrade::Good => {
            "A GOOD score earns favorable terms: up to 80% LTV and a 2% rate discount."
        }
        CreditGrade::Fair => {
            "A FAIR score gives standard terms: up to 70% LTV and a 1% rate discount. \
             Raising it unlocks better rates."
        }
        CreditGrade::Poor => {
            "A POOR score limits you to conservative terms: up to 60% LTV at standard \
             rates."
        }
        CreditGrade::VeryPoor => {
            "A VERY_POOR score restricts lending to about 50% LTV and may carry higher \
             rates. Significant improvement is needed."
        }
    }
}
