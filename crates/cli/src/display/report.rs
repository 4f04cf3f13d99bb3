use std::fmt::Display;

const RULE_WIDTH: usize = 80;

pub fn print_banner(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_footer(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_section(title: &str) {
    println!("\n--- {title} ---");
}

pub fn print_field(label: &str, value: impl Display) {
    println!("{label}: {value}");
}

pub fn print_list<I, T>(items: I, bullet: &str)
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    for item in items {
        println!("   {bullet}{item}");
    }
}
