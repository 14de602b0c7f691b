//! Free-tier LLM/API providers.

use crate::types::{Model, Provider};

const fn model(name: &'static str) -> Model {
    Model { name, limits: &[] }
}

const fn limited(name: &'static str, limits: &'static [&'static str]) -> Model {
    Model { name, limits }
}

/// Built-in free-tier providers, in display order.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        name: "OpenRouter",
        link: "https://openrouter.ai",
        logo: "https://www.google.com/s2/favicons?domain=openrouter.ai&sz=64",
        limits: &["20 requests/minute", "200 requests/day"],
        models: &[
            model("DeepSeek R1"),
            model("DeepSeek R1 Distill Llama 70B"),
            model("DeepSeek V3"),
            model("Dolphin 3.0 Mistral 24B"),
            model("Dolphin 3.0 R1 Mistral 24B"),
            model("Gemini 2.0 Flash Lite Preview 02-05"),
            model("Gemma 2 9B Instruct"),
            model("Llama 3 8B Instruct"),
            model("Llama 3.1 Nemotron 70B Instruct"),
            model("Llama 3.2 11B Vision Instruct"),
            model("Llama 3.3 70B Instruct"),
            model("Mistral 7B Instruct"),
            model("Mistral Nemo"),
            model("Mistral Small 24B Instruct 2501"),
            model("Mythomax L2 13B"),
            model("OpenChat 7B"),
            model("Phi-3 Medium 128k Instruct"),
            model("Phi-3 Mini 128k Instruct"),
            model("Qwen VL Plus"),
            model("Qwen2.5 VL 72B Instruct"),
            model("Rogue Rose 103B v0.2"),
            model("Toppy M 7B"),
            model("Zephyr 7B Beta"),
        ],
    },
    Provider {
        name: "Google AI Studio",
        link: "https://aistudio.google.com",
        logo: "https://www.google.com/s2/favicons?domain=aistudio.google.com&sz=64",
        limits: &["Data is used for training (when used outside of the UK/CH/EEA/EU)."],
        models: &[
            limited(
                "Gemini 2.0 Flash",
                &[
                    "1,000,000 tokens/minute",
                    "1,500 requests/day",
                    "15 requests/minute",
                ],
            ),
            limited(
                "Gemini 2.0 Flash-Lite",
                &[
                    "1,000,000 tokens/minute",
                    "1,500 requests/day",
                    "30 requests/minute",
                ],
            ),
            limited(
                "Gemini 1.5 Flash",
                &[
                    "1,000,000 tokens/minute",
                    "1,500 requests/day",
                    "15 requests/minute",
                ],
            ),
            limited(
                "Gemini 1.5 Flash-8B",
                &[
                    "1,000,000 tokens/minute",
                    "1,500 requests/day",
                    "15 requests/minute",
                ],
            ),
        ],
    },
    Provider {
        name: "Groq",
        link: "https://console.groq.com",
        logo: "https://www.google.com/s2/favicons?domain=groq.com&sz=64",
        limits: &["Limits apply per model"],
        models: &[
            limited(
                "DeepSeek R1 Distill Llama 70B",
                &["1,000 requests/day", "6,000 tokens/minute"],
            ),
            limited(
                "Gemma 2 9B Instruct",
                &["14,400 requests/day", "15,000 tokens/minute"],
            ),
            limited(
                "Llama 3.1 8B",
                &["14,400 requests/day", "20,000 tokens/minute"],
            ),
            limited(
                "Llama 3.3 70B",
                &["1,000 requests/day", "6,000 tokens/minute"],
            ),
            limited(
                "Mixtral 8x7B",
                &["14,400 requests/day", "5,000 tokens/minute"],
            ),
            limited(
                "Whisper Large v3",
                &["7,200 audio-seconds/minute", "2,000 requests/day"],
            ),
        ],
    },
    Provider {
        name: "Cerebras",
        link: "https://cloud.cerebras.ai",
        logo: "https://www.google.com/s2/favicons?domain=cerebras.ai&sz=64",
        limits: &["Free tier restricted to 8K context"],
        models: &[
            limited(
                "Llama 3.1 8B",
                &["30 requests/minute", "1,000,000 tokens/day"],
            ),
            limited(
                "Llama 3.3 70B",
                &["30 requests/minute", "1,000,000 tokens/day"],
            ),
        ],
    },
    Provider {
        name: "Mistral (La Plateforme)",
        link: "https://console.mistral.ai",
        logo: "https://www.google.com/s2/favicons?domain=mistral.ai&sz=64",
        limits: &[
            "1 request/second",
            "500,000 tokens/minute",
            "1,000,000,000 tokens/month",
            "Free tier requires phone verification",
        ],
        models: &[model("Open and Proprietary Mistral models")],
    },
    Provider {
        name: "Cloudflare Workers AI",
        link: "https://developers.cloudflare.com/workers-ai",
        logo: "https://www.google.com/s2/favicons?domain=cloudflare.com&sz=64",
        limits: &["10,000 neurons/day"],
        models: &[
            model("DeepSeek R1 Distill Qwen 32B"),
            model("Gemma 2B/7B"),
            model("Llama 3/3.1/3.2/3.3"),
            model("Mistral 7B"),
            model("OpenChat 3.5"),
        ],
    },
    Provider {
        name: "GitHub Models",
        link: "https://github.com/marketplace/models",
        logo: "https://www.google.com/s2/favicons?domain=github.com&sz=64",
        limits: &[
            "Dependent on Copilot subscription tier",
            "Extremely restrictive input/output token limits",
        ],
        models: &[
            model("DeepSeek R1"),
            model("GPT-4o"),
            model("GPT-4o mini"),
            model("Llama 3.3 70B Instruct"),
            model("o3-mini"),
            model("Phi-4"),
        ],
    },
    Provider {
        name: "HuggingFace Serverless Inference",
        link: "https://huggingface.co/docs/api-inference",
        logo: "https://www.google.com/s2/favicons?domain=huggingface.co&sz=64",
        limits: &[
            "Limited to models smaller than 10GB",
            "Some popular models are supported even if they exceed 10GB",
        ],
        models: &[model("Various open models")],
    },
    Provider {
        name: "Scaleway Generative APIs",
        link: "https://console.scaleway.com/generative-api",
        logo: "https://www.google.com/s2/favicons?domain=scaleway.com&sz=64",
        limits: &["100-300 requests/minute", "Free beta until March 2025"],
        models: &[
            model("DeepSeek R1"),
            model("Llama 3.1/3.3 70B"),
            model("Mistral Nemo"),
            model("Pixtral 12B"),
        ],
    },
    Provider {
        name: "OVH AI Endpoints",
        link: "https://endpoints.ai.cloud.ovh.net",
        logo: "https://www.google.com/s2/favicons?domain=ovhcloud.com&sz=64",
        limits: &["12 requests/minute", "Free beta"],
        models: &[
            model("DeepSeek R1"),
            model("Llama 3 8B/3.1 70B"),
            model("Mistral 7B/Nemo"),
            model("Mixtral 8x7B"),
        ],
    },
];
