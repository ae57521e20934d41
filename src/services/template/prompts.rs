//! System instruction for the shopping assistant

use super::TemplateEngine;
use crate::services::catalog::Product;
use anyhow::Result;
use minijinja::context;

pub const STORE_NAME: &str = "TechNova";

const SYSTEM_PROMPT_NAME: &str = "system_prompt.txt";

const SYSTEM_PROMPT: &str = r#"You are the {{ store_name }} AI Assistant, a helpful and knowledgeable guide for our futuristic electronics store.

About {{ store_name }}:
- We sell cutting-edge technology: smartphones, wearables, audio equipment, and smart home devices
- Our products feature advanced technologies like holographic displays, neural ANC, and quantum processors
- We pride ourselves on innovation and customer experience

Your role:
1. Help customers find the right products for their needs
2. Answer technical questions about our products
3. Provide comparisons between products when asked
4. Analyze images of gadgets when customers share them
5. Be enthusiastic about technology while remaining helpful

Our current product lineup:
{% for product in products -%}
- {{ product.name }} ({{ product.price | usd }}) - {{ product.kind }} with {{ product.specs | join(", ") }}
{% endfor %}
When analyzing images, identify the device type and provide relevant insights or comparisons to our products.

Keep responses concise but helpful. Use a friendly, tech-savvy tone."#;

/// Renders the system instruction once; the result is static for the process.
pub fn render_system_prompt(products: &[Product]) -> Result<String> {
    let mut engine = TemplateEngine::new()?;
    engine.add_template(SYSTEM_PROMPT_NAME, SYSTEM_PROMPT)?;
    engine.render(
        SYSTEM_PROMPT_NAME,
        context! {
            store_name => STORE_NAME,
            products => products,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog;

    #[test]
    fn test_prompt_lists_every_product() -> Result<()> {
        let prompt = render_system_prompt(catalog::all())?;

        assert!(prompt.starts_with("You are the TechNova AI Assistant"));
        for product in catalog::all() {
            assert!(prompt.contains(product.name), "missing {}", product.name);
        }
        assert!(prompt.contains(
            "- Xenon Ultra 5G ($1,299) - Flagship smartphone with Holographic OLED, Quantum Snap 9 Gen 5, 200MP Camera, 1TB Storage"
        ));
        assert!(prompt.contains("- Core Hub Max ($299) - Smart home hub with "));
        assert!(prompt.contains("- Nebula Watch X ($499) - Smartwatch with "));
        assert!(prompt.ends_with("Use a friendly, tech-savvy tone."));

        Ok(())
    }
}
