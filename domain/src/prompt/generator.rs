//! Prompt generation: pick a domain template and fill it

use super::random::RandomSource;
use crate::catalog::{chatbot_domain::ChatbotDomain, template::TemplateCatalog};

/// Build a system prompt for `domain` from `user_input`.
///
/// One template is drawn uniformly from the domain's list using `random`,
/// and its marker is replaced with `user_input` verbatim.
pub fn generate_prompt(
    domain: ChatbotDomain,
    user_input: &str,
    random: &dyn RandomSource,
) -> String {
    let templates = TemplateCatalog::templates(domain);
    let index = random.pick(templates.len()).min(templates.len() - 1);
    templates[index].fill(user_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::random::FixedRandomSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every `len` it is asked for and cycles through indices
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl RandomSource for CountingSource {
        fn pick(&self, len: usize) -> usize {
            self.calls.fetch_add(1, Ordering::SeqCst) % len
        }
    }

    #[test]
    fn test_educational_example_is_one_of_two() {
        let input = "What is machine learning?";
        let first = generate_prompt(
            ChatbotDomain::EducationalAssistant,
            input,
            &FixedRandomSource(0),
        );
        let second = generate_prompt(
            ChatbotDomain::EducationalAssistant,
            input,
            &FixedRandomSource(1),
        );
        assert_eq!(
            first,
            "You are a tutor. Explain the concept of: \"What is machine learning?\""
        );
        assert_eq!(second, "Teach the user about: \"What is machine learning?\"");
    }

    #[test]
    fn test_prompt_contains_input_for_every_domain() {
        let inputs = ["", "   ", "hello \"quoted\" {user_input}", "多言語\ninput"];
        for domain in ChatbotDomain::ALL {
            for input in inputs {
                for index in 0..TemplateCatalog::templates(domain).len() {
                    let prompt = generate_prompt(domain, input, &FixedRandomSource(index));
                    assert!(prompt.contains(input));
                }
            }
        }
    }

    #[test]
    fn test_draws_once_per_call() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };
        let a = generate_prompt(ChatbotDomain::HrBot, "leave", &source);
        let b = generate_prompt(ChatbotDomain::HrBot, "leave", &source);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        struct Wild;
        impl RandomSource for Wild {
            fn pick(&self, _len: usize) -> usize {
                usize::MAX
            }
        }
        let prompt = generate_prompt(ChatbotDomain::CustomerSupport, "refund", &Wild);
        assert_eq!(prompt, "Politely help the customer resolve: \"refund\"");
    }
}
