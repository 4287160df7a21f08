//! MiniJinja template engine wrapper

use anyhow::Result;
use minijinja::{context, Environment};

/// Page templates are compiled into the binary so rendering never depends on
/// the working directory.
const CHAT_TEMPLATE: &str = include_str!("../../web/templates/chat.html");

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));
        env.add_template("chat.html", CHAT_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the chat page for a freshly minted session.
    pub fn render_chat_page(&self, session_id: &str) -> Result<String> {
        let template = self.env.get_template("chat.html")?;
        Ok(template.render(context! {
            session_id => session_id,
            title => "IoT-Partner",
            version => env!("CARGO_PKG_VERSION"),
        })?)
    }

    /// Add a template from owned strings. MiniJinja wants 'static names and
    /// sources, so the strings are leaked; templates are registered once at
    /// startup (or in tests), never per request.
    pub fn add_template_owned(&mut self, name: String, content: String) -> Result<()> {
        let name_static: &'static str = Box::leak(name.into_boxed_str());
        let content_static: &'static str = Box::leak(content.into_boxed_str());
        self.env.add_template(name_static, content_static)?;
        Ok(())
    }

    pub fn render(&self, template_name: &str, ctx: minijinja::Value) -> Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_added_templates() -> Result<()> {
        let mut engine = TemplateEngine::new()?;
        engine.add_template_owned("test".into(), "Hello {{ name }}!".into())?;

        let result = engine.render("test", minijinja::context! { name => "World" })?;
        assert_eq!(result, "Hello World!");

        Ok(())
    }

    #[test]
    fn chat_page_embeds_the_session_id() -> Result<()> {
        let engine = TemplateEngine::new()?;
        let html = engine.render_chat_page("0192-test-session")?;

        assert!(html.contains("0192-test-session"));
        assert!(html.contains("IoT-Partner"));

        Ok(())
    }
}
