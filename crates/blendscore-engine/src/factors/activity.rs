//! Activity factors: wallet age, transaction history, loan activity

use blendscore_common::{CreditFactor, FactorDetail, FactorId, LoanActivity};

use super::non_negative;

/// Wallet age that earns the full wallet_age score (5 years)
pub const FULL_CREDIT_AGE_MONTHS: f64 = 60.0;

/// Transaction count that earns the full transaction_history score
pub const FULL_CREDIT_TRANSACTIONS: f64 = 10_000.0;

/// Average loan size that earns the full size component
pub const FULL_CREDIT_LOAN_SIZE: f64 = 100_000.0;

/// Loans per month that earns the full frequency component
pub const OPTIMAL_LOAN_FREQUENCY: f64 = 1.5;

/// `min(months / 60, 1) × 120`
pub fn wallet_age(months: u32) -> CreditFactor {
    let id = FactorId::WalletAge;
    let score = (months as f64 / FULL_CREDIT_AGE_MONTHS).min(1.0) * id.max_score();

    let mut improvements = Vec::new();
    if months < 12 {
        improvements.push("Continue using your wallet to build history".to_string());
    }

    CreditFactor::new(id, score, FactorDetail::WalletAge { months }, improvements)
}

/// `min(log10(tx + 1) / log10(10000), 1) × 150`
pub fn transaction_history(total_transactions: u64) -> CreditFactor {
    let id = FactorId::TransactionHistory;
    let scaled = (total_transactions as f64 + 1.0).log10() / FULL_CREDIT_TRANSACTIONS.log10();
    let score = scaled.min(1.0) * id.max_score();

    let mut improvements = Vec::new();
    if total_transactions < 100 {
        improvements.push("Increase your on-chain activity".to_string());
    }

    CreditFactor::new(
        id,
        score,
        FactorDetail::TransactionHistory { total_transactions },
        improvements,
    )
}

/// Size component (log-scaled, 60%) plus frequency component (40%), × 80
///
/// Frequency peaks at 1.5 loans/month and falls linearly to zero at 0 and 3.
pub fn loan_activity(activity: &LoanActivity) -> CreditFactor {
    let id = FactorId::LoanActivity;
    let average_loan_size = non_negative(activity.average_loan_size);
    let frequency = non_negative(activity.monthly_loan_frequency);

    let size_score =
        ((average_loan_size + 1.0).log10() / FULL_CREDIT_LOAN_SIZE.log10()).min(1.0) * 0.6;
    let frequency_score = (1.0
        - (frequency - OPTIMAL_LOAN_FREQUENCY).abs() / OPTIMAL_LOAN_FREQUENCY)
        .max(0.0)
        * 0.4;
    let score = (size_score + frequency_score) * id.max_score();

    let mut improvements = Vec::new();
    if activity.total_loans < 5 {
        improvements.push("Increase loan activity to build history".to_string());
    }
    if frequency < 0.5 {
        improvements.push("More regular borrowing activity can improve score".to_string());
    }

    CreditFactor::new(
        id,
        score,
        FactorDetail::LoanActivity {
            total_loans: activity.total_loans,
            average_loan_size,
            monthly_loan_frequency: frequency,
        },
        improvements,
    )
}
