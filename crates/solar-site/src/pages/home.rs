//! Home page

use leptos::*;
use crate::components::*;
use crate::context::use_site;

const BENEFITS: [&str; 4] = [
    "Instant UPI payments",
    "No hidden charges",
    "Track your referrals",
    "24/7 support",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_site().config;
    let reward = config.reward_label();
    let badge_text = format!("{reward} per successful referral");

    view! {
        <div class="min-h-screen">
            // Hero Section
            <section class="relative overflow-hidden bg-gradient-to-b from-sky-100 to-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class="space-y-8">
                            <Badge>{badge_text}</Badge>

                            <h1 class="text-4xl md:text-6xl font-bold text-gray-900 leading-tight">
                                "Earn Money by "
                                <span class="text-orange-500 block">"Referring Solar"</span>
                            </h1>

                            <p class="text-xl text-gray-600 leading-relaxed">
                                {format!(
                                    "Help your friends save on electricity bills with solar power \
                                     and earn {reward} for every successful installation. It's a win-win!"
                                )}
                            </p>

                            <div class="flex flex-col sm:flex-row gap-4">
                                <a href="/refer" class="px-8 py-4 bg-orange-500 hover:bg-orange-600 text-white text-lg font-semibold rounded-lg shadow transition text-center">
                                    "Start Referring →"
                                </a>
                                <a href="/how-it-works" class="px-8 py-4 bg-white hover:bg-gray-50 text-gray-900 text-lg font-semibold rounded-lg border border-gray-300 transition text-center">
                                    "How it Works"
                                </a>
                            </div>

                            <div class="flex flex-wrap items-center gap-6 text-sm text-gray-600">
                                {BENEFITS.into_iter().map(|benefit| view! {
                                    <div class="flex items-center gap-2">
                                        <span class="text-orange-500">"✓"</span>
                                        {benefit}
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="relative">
                            <div class="w-full aspect-[4/3] rounded-2xl shadow-2xl bg-gradient-to-br from-sky-400 via-sky-300 to-amber-200 flex items-center justify-center text-9xl">
                                "🏠"
                            </div>

                            // Floating reward card
                            <div class="absolute -bottom-6 -left-6 w-64 bg-white rounded-xl shadow-lg p-4">
                                <div class="flex items-center gap-3">
                                    <span class="p-2 bg-gradient-to-br from-amber-400 to-orange-500 rounded-lg text-white font-bold">"₹"</span>
                                    <div>
                                        <p class="font-semibold">"Instant Rewards"</p>
                                        <p class="text-sm text-gray-600">{format!("{reward} per referral")}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"How It Works"</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Simple 4-step process to earn money through solar referrals"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        <StepCard
                            number=1
                            icon="👥"
                            title="Submit Referral"
                            description="Share details of someone interested in solar installation"
                            arrow=true
                        />
                        <StepCard
                            number=2
                            icon="☀️"
                            title="Solar Installation"
                            description="Your friend gets solar installed through our company"
                            arrow=true
                        />
                        <StepCard
                            number=3
                            icon="📱"
                            title="Get Coupon"
                            description="Receive SMS with unique redemption code"
                            arrow=true
                        />
                        <StepCard
                            number=4
                            icon="💳"
                            title=format!("Claim {reward}")
                            description="Redeem reward via UPI or bank transfer"
                        />
                    </div>
                </div>
            </section>

            // CTA Section
            <section class="py-20 bg-gradient-to-br from-amber-50 to-orange-100">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6">"Ready to Start Earning?"</h2>
                    <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                        "Join thousands of people already earning money by helping their "
                        "community switch to clean, renewable solar energy."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/refer" class="px-8 py-4 bg-orange-500 hover:bg-orange-600 text-white text-lg font-semibold rounded-lg shadow transition">
                            "🏆 Submit Your First Referral"
                        </a>
                        <a href="/redeem" class="px-8 py-4 bg-white hover:bg-gray-50 text-gray-900 text-lg font-semibold rounded-lg border border-gray-300 transition">
                            "₹ Redeem Existing Coupon"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
