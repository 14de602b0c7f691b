//! Providers offering one-time trial credit.

use crate::types::TrialCreditProvider;

/// Built-in trial-credit offers, in display order.
pub const TRIAL_CREDIT_PROVIDERS: &[TrialCreditProvider] = &[
    TrialCreditProvider {
        name: "Together",
        credits: "$1 when you add a payment method",
        models: &["Various open models"],
        link: "https://together.ai",
        logo: "https://www.google.com/s2/favicons?domain=together.ai&sz=64",
    },
    TrialCreditProvider {
        name: "Fireworks",
        credits: "$1",
        models: &["Various open models"],
        link: "https://fireworks.ai",
        logo: "https://www.google.com/s2/favicons?domain=fireworks.ai&sz=64",
    },
    TrialCreditProvider {
        name: "Unify",
        credits: "$5 when you add a payment method",
        models: &[
            "Routes to other providers, various open models and proprietary models (OpenAI, Gemini, Anthropic, Mistral, Perplexity, etc)",
        ],
        link: "https://unify.ai",
        logo: "https://www.google.com/s2/favicons?domain=unify.ai&sz=64",
    },
    TrialCreditProvider {
        name: "NVIDIA NIM",
        credits: "1,000 API calls for 1 month",
        models: &["Various open models"],
        link: "https://build.nvidia.com",
        logo: "https://www.google.com/s2/favicons?domain=nvidia.com&sz=64",
    },
    TrialCreditProvider {
        name: "Baseten",
        credits: "$30",
        models: &["Any supported model - pay by compute time"],
        link: "https://app.baseten.co",
        logo: "https://www.google.com/s2/favicons?domain=baseten.co&sz=64",
    },
    TrialCreditProvider {
        name: "Hyperbolic",
        credits: "$1",
        models: &[
            "DeepSeek V3",
            "Llama 3.1 405B Base",
            "Llama 3.3 70B Instruct",
            "Qwen2.5 Coder 32B Instruct",
        ],
        link: "https://app.hyperbolic.xyz",
        logo: "https://www.google.com/s2/favicons?domain=hyperbolic.xyz&sz=64",
    },
    TrialCreditProvider {
        name: "SambaNova Cloud",
        credits: "$5 for 3 months",
        models: &["Llama 3.1 405B", "Llama 3.3 70B", "Qwen 2.5 72B"],
        link: "https://cloud.sambanova.ai",
        logo: "https://www.google.com/s2/favicons?domain=sambanova.ai&sz=64",
    },
];
