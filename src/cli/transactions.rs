use super::ui;
use crate::core::{Ledger, Totals, Transaction, TransactionStore};
use comfy_table::Cell;
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 30;

/// Renders the transaction table, in insertion order.
pub fn transactions_table(transactions: &[Transaction]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Description"),
        ui::header_cell("Amount"),
        ui::header_cell("Kind"),
    ]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(ui::style_text(&t.id, ui::StyleType::Subtle)),
            Cell::new(&t.description),
            ui::amount_cell(t.amount, t.kind),
            ui::kind_cell(t.kind),
        ]);
    }
    table.to_string()
}

/// Two-bar income/expense breakdown.
pub fn breakdown_chart(totals: &Totals) -> String {
    let max = totals.income.max(totals.expense);
    let line = |label: &str, value: Decimal, bar: String| {
        format!("{label:<8} {bar:<width$} {}", ui::format_brl(value), width = BAR_WIDTH)
    };

    format!(
        "{}\n{}",
        line(
            "Income",
            totals.income,
            console::style(ui::bar(totals.income, max, BAR_WIDTH)).green().to_string()
        ),
        line(
            "Expense",
            totals.expense,
            console::style(ui::bar(totals.expense, max, BAR_WIDTH)).red().to_string()
        ),
    )
}

pub fn render<S: TransactionStore>(ledger: &Ledger<S>) -> String {
    let mut output = format!("{}\n\n", ui::style_text("Transactions", ui::StyleType::Title));

    if ledger.is_empty() {
        output.push_str(&ui::style_text("No transactions yet.", ui::StyleType::Subtle));
    } else {
        output.push_str(&transactions_table(ledger.transactions()));
    }

    output.push_str(&format!(
        "\n\n{}\n{}",
        ui::style_text("Breakdown", ui::StyleType::Title),
        breakdown_chart(&ledger.totals())
    ));

    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Balance", ui::StyleType::TotalLabel),
        ui::styled_balance(ledger.balance())
    ));
    output
}

pub fn run<S: TransactionStore>(ledger: &Ledger<S>) {
    println!("{}", render(ledger));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionKind;
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_render_lists_in_order_with_balance() {
        console::set_colors_enabled(false);
        let mut ledger = Ledger::open(MemoryStore::new()).await;
        ledger
            .add("Salary", dec!(1000), TransactionKind::Income)
            .await
            .unwrap();
        ledger
            .add("Rent", dec!(300), TransactionKind::Expense)
            .await
            .unwrap();

        let output = render(&ledger);
        let salary_pos = output.find("Salary").unwrap();
        let rent_pos = output.find("Rent").unwrap();
        assert!(salary_pos < rent_pos);
        assert!(output.contains("1.000,00"));
        assert!(output.contains("Balance: R$ 700,00"));
    }

    #[tokio::test]
    async fn test_render_empty_ledger() {
        console::set_colors_enabled(false);
        let ledger = Ledger::open(MemoryStore::new()).await;
        let output = render(&ledger);
        assert!(output.contains("No transactions yet."));
        assert!(output.contains("Balance: R$ 0,00"));
    }

    #[tokio::test]
    async fn test_render_with_huge_amount() {
        console::set_colors_enabled(false);
        let mut ledger = Ledger::open(MemoryStore::new()).await;
        ledger
            .add(
                "Jackpot",
                Decimal::from_i128_with_scale(10_i128.pow(28), 0),
                TransactionKind::Income,
            )
            .await
            .unwrap();
        ledger
            .add("Rent", dec!(300), TransactionKind::Expense)
            .await
            .unwrap();

        let output = render(&ledger);
        assert!(output.contains("Jackpot"));
        assert!(output.contains("Balance: R$ 9.999.999.999.999.999.999.999.999.700,00"));
    }

    #[test]
    fn test_breakdown_chart_scales_to_larger_side() {
        console::set_colors_enabled(false);
        let chart = breakdown_chart(&Totals {
            income: dec!(1000),
            expense: dec!(500),
        });
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
    }
}
