//! How-it-works page

use leptos::*;
use crate::components::*;
use crate::context::use_site;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 4],
}

const STEPS: [Step; 4] = [
    Step {
        icon: "👥",
        title: "Submit Referral",
        description: "Fill out our simple form with details of someone interested in solar installation. Takes less than 2 minutes!",
        details: [
            "Enter your contact information",
            "Provide customer's details",
            "Add installation address",
            "Optional: Add notes about requirements",
        ],
    },
    Step {
        icon: "☀️",
        title: "Solar Installation",
        description: "Our team contacts the customer and completes the solar installation process through our company.",
        details: [
            "We contact the referred customer",
            "Free site survey and consultation",
            "Professional solar installation",
            "System activation and handover",
        ],
    },
    Step {
        icon: "📱",
        title: "SMS Notification",
        description: "Once installation is complete, you receive an SMS with a unique coupon code to claim your reward.",
        details: [
            "Installation completion verified",
            "Unique coupon code generated",
            "SMS sent to your registered number",
            "Code valid for 90 days",
        ],
    },
    Step {
        icon: "💳",
        title: "Claim Reward",
        description: "Use your coupon code on our website to claim your reward via UPI or bank transfer.",
        details: [
            "Enter coupon code on redeem page",
            "Choose UPI or bank transfer",
            "Provide payment details",
            "Receive your reward within 24 hours",
        ],
    },
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let reward = use_site().config.reward_label();

    let faqs = vec![
        (
            "How long does it take to receive my reward?",
            "UPI transfers are instant, while bank transfers take 1-2 business days after you redeem your coupon.".to_string(),
        ),
        (
            "Can I refer the same customer multiple times?",
            "No, each customer can only be referred once. Duplicate referrals will not be eligible for rewards.".to_string(),
        ),
        (
            "What if the customer doesn't complete the installation?",
            "Rewards are only paid for completed installations. If a customer doesn't proceed, no reward is earned.".to_string(),
        ),
        (
            "Is there a limit to how many people I can refer?",
            format!("No limit! You can refer as many people as you want and earn {reward} for each successful installation."),
        ),
    ];

    let steps = STEPS.iter().enumerate().map(|(index, step)| {
        // Alternate the illustration side on wide screens
        let (text_class, art_class) = if index % 2 == 1 {
            ("space-y-6 lg:order-2", "bg-white rounded-xl shadow-lg p-8 lg:order-1")
        } else {
            ("space-y-6", "bg-white rounded-xl shadow-lg p-8")
        };
        view! {
            <div class="grid lg:grid-cols-2 gap-8 items-center">
                <div class=text_class>
                    <div class="flex items-center gap-4">
                        <span class="flex items-center justify-center w-16 h-16 bg-gradient-to-br from-amber-400 to-orange-500 rounded-full shadow text-3xl">
                            {step.icon}
                        </span>
                        <span class="text-lg px-4 py-2 border border-gray-300 rounded-full font-semibold">
                            {format!("Step {}", index + 1)}
                        </span>
                    </div>
                    <h2 class="text-3xl font-bold text-gray-900">{step.title}</h2>
                    <p class="text-lg text-gray-600">{step.description}</p>
                    <ul class="space-y-3">
                        {step.details.iter().map(|detail| view! {
                            <li class="flex items-center gap-3">
                                <span class="text-orange-500">"✓"</span>
                                <span>{*detail}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    {(index == 0).then(|| view! {
                        <a href="/refer" class="inline-block px-6 py-3 bg-orange-500 hover:bg-orange-600 text-white font-semibold rounded-lg shadow transition">
                            "Start Your First Referral →"
                        </a>
                    })}
                    {(index == STEPS.len() - 1).then(|| view! {
                        <a href="/redeem" class="inline-block px-6 py-3 bg-white hover:bg-gray-50 text-gray-900 font-semibold rounded-lg border border-gray-300 transition">
                            "₹ Redeem Existing Coupon"
                        </a>
                    })}
                </div>
                <div class=art_class>
                    <div class="aspect-square bg-gradient-to-br from-amber-50 to-orange-100 rounded-lg flex items-center justify-center text-8xl">
                        {step.icon}
                    </div>
                </div>
            </div>
        }
    }).collect::<Vec<_>>();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-sky-100 to-white">
            // Header
            <section class="py-20">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <div class="mb-4">
                        <Badge>{format!("{reward} per successful referral")}</Badge>
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                        "How the Solar Referral System Works"
                    </h1>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Our simple 4-step process makes it easy to earn money by helping your "
                        "friends and family switch to clean, renewable solar energy."
                    </p>
                </div>
            </section>

            // Steps
            <section class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid gap-12">{steps}</div>
                </div>
            </section>

            // Benefits
            <section class="py-20 bg-gradient-to-br from-amber-50 to-orange-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Why Choose Our Referral Program?"</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "We've designed our program to be fair, fast, and beneficial for everyone involved."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <BenefitCard
                            icon="✅"
                            title="No Hidden Charges"
                            description="100% of the reward goes to you. No processing fees or deductions."
                        />
                        <BenefitCard
                            icon="⏱️"
                            title="Quick Payouts"
                            description="UPI transfers are instant. Bank transfers complete within 1-2 business days."
                        />
                        <BenefitCard
                            icon="🛡️"
                            title="Secure Process"
                            description="Your data is protected. All transactions are secured with bank-grade encryption."
                        />
                        <BenefitCard
                            icon="🏆"
                            title="Unlimited Referrals"
                            description="No limit on referrals. Earn a reward for each successful solar installation."
                        />
                    </div>
                </div>
            </section>

            // FAQs
            <section class="py-20 bg-white">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Frequently Asked Questions"</h2>
                        <p class="text-xl text-gray-600">"Everything you need to know about our referral program"</p>
                    </div>
                    <div class="space-y-6">
                        {faqs.into_iter().map(|(question, answer)| view! {
                            <FaqCard question=question answer=answer/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-gradient-to-r from-amber-400 to-orange-500">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">"Ready to Start Earning?"</h2>
                    <p class="text-xl text-white/90 mb-8 max-w-2xl mx-auto">
                        "Join thousands of people already earning money by promoting clean solar energy "
                        "in their communities."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/refer" class="px-8 py-4 bg-white text-orange-600 text-lg font-semibold rounded-lg hover:bg-gray-100 transition">
                            "Submit Your First Referral"
                        </a>
                        <a href="/redeem" class="px-8 py-4 border border-white text-white text-lg font-semibold rounded-lg hover:bg-white hover:text-orange-600 transition">
                            "Redeem Existing Coupon"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
