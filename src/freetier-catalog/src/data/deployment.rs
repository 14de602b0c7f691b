//! Hosting and deployment platforms with a free tier.

use crate::types::DeploymentProvider;

/// Built-in deployment platforms, in display order.
pub const DEPLOYMENT_PROVIDERS: &[DeploymentProvider] = &[
    DeploymentProvider {
        name: "GitHub Codespaces",
        features: &[
            "120 core hours/month",
            "Free for public repositories",
            "Integrated with GitHub",
            "Full development environment",
        ],
        link: "https://github.com/features/codespaces",
        logo: "https://www.google.com/s2/favicons?domain=github.com&sz=64",
    },
    DeploymentProvider {
        name: "Cloudflare Workers",
        features: &[
            "100,000 requests/day",
            "Global edge deployment",
            "Workers AI integration",
            "Unlimited scripts",
        ],
        link: "https://workers.cloudflare.com",
        logo: "https://www.google.com/s2/favicons?domain=cloudflare.com&sz=64",
    },
    DeploymentProvider {
        name: "Google Cloud Run",
        features: &[
            "2 million requests/month",
            "Serverless containers",
            "Auto-scaling",
            "Pay-per-use after free tier",
        ],
        link: "https://cloud.google.com/run",
        logo: "https://www.google.com/s2/favicons?domain=cloud.google.com&sz=64",
    },
    DeploymentProvider {
        name: "Vercel",
        features: &[
            "100 GB bandwidth/month",
            "Serverless functions",
            "Edge deployment",
            "Git integration",
        ],
        link: "https://vercel.com",
        logo: "https://www.google.com/s2/favicons?domain=vercel.com&sz=64",
    },
    DeploymentProvider {
        name: "Netlify",
        features: &[
            "100 GB bandwidth/month",
            "300 build minutes/month",
            "Deploy previews",
            "Serverless functions",
        ],
        link: "https://www.netlify.com",
        logo: "https://www.google.com/s2/favicons?domain=netlify.com&sz=64",
    },
    DeploymentProvider {
        name: "Render",
        features: &[
            "750 instance hours/month",
            "Static sites and web services",
            "Managed TLS",
            "Services spin down when idle",
        ],
        link: "https://render.com",
        logo: "https://www.google.com/s2/favicons?domain=render.com&sz=64",
    },
];
