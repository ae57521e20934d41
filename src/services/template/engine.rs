//! MiniJinja template engine wrapper

use anyhow::Result;
use minijinja::{Environment, Value};

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        // Configure MiniJinja
        env.set_debug(cfg!(debug_assertions));

        // Add custom filters
        env.add_filter("usd", format_usd);

        Ok(Self { env })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }

    /// Register a template whose source lives for the whole process
    pub fn add_template(&mut self, name: &'static str, content: &'static str) -> Result<()> {
        self.env.add_template(name, content)?;
        Ok(())
    }
}

/// `1299` -> `$1,299`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_template_engine() -> Result<()> {
        let mut engine = TemplateEngine::new()?;
        engine.add_template("test", "Hello {{ name }}!")?;

        let result = engine.render("test", context! { name => "World" })?;
        assert_eq!(result, "Hello World!");

        Ok(())
    }

    #[test]
    fn test_usd_filter() -> Result<()> {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(349), "$349");
        assert_eq!(format_usd(2499), "$2,499");
        assert_eq!(format_usd(1_234_567), "$1,234,567");

        let mut engine = TemplateEngine::new()?;
        engine.add_template("price", "{{ amount | usd }}")?;
        assert_eq!(engine.render("price", context! { amount => 1299 })?, "$1,299");

        Ok(())
    }
}
