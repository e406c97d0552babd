//! Coupon redemption page

use leptos::*;
use solar_core::{
    FormPhase, Notification, PayoutMethod, RedemptionField, RedemptionRequest, Submission, Ticket,
};
use tracing::debug;
use crate::components::*;
use crate::context::use_site;

fn method_icon(method: PayoutMethod) -> &'static str {
    match method {
        PayoutMethod::Upi => "💳",
        PayoutMethod::Bank => "🏦",
    }
}

#[component]
pub fn RedeemPage() -> impl IntoView {
    let site = use_site();
    let reward = site.config.reward_label();
    let reward_headline = site.config.reward_headline();

    let submission = create_rw_signal(Submission::new(RedemptionRequest::default()));
    let method = create_memo(move |_| submission.with(|s| s.request().payout_method));

    on_cleanup(move || {
        let _ = submission.try_update(Submission::cancel);
    });

    let submit = create_action(move |(ticket, request): &(Ticket, RedemptionRequest)| {
        let (ticket, request) = (*ticket, request.clone());
        let site = site.clone();

        async move {
            let outcome = site.service.submit_redemption(&request).await;
            if let Some(settled) = submission.try_update(|s| s.settle(ticket, outcome)).flatten() {
                site.notify(Notification::for_outcome(settled));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submission.try_update(Submission::begin) {
            Some(Ok(pending)) => submit.dispatch(pending),
            Some(Err(err)) => debug!(%err, "redemption submit ignored"),
            None => {}
        }
    };

    let submitting = move || submission.with(Submission::is_submitting);

    // Only fields of the active payout method are mounted, so the browser's
    // required check never sees the hidden ones.
    let field = move |field: RedemptionField, placeholder: &'static str| {
        view! {
            <FormField
                id=field.id()
                label=field.label()
                placeholder=placeholder
                value=Signal::derive(move || submission.with(|s| field.get(s.request()).to_string()))
                on_input=Callback::new(move |text: String| {
                    submission.update(|s| s.edit(|r| field.apply(r, text)))
                })
            />
        }
    };

    let intro = format!("Enter your coupon code to claim your {reward} referral reward");
    let button_label = move || {
        if submitting() {
            "Processing...".to_string()
        } else {
            format!("Claim {reward} via {}", method.get().short_name())
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-b from-sky-100 to-white py-12">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                // Header
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">"Redeem Your Reward"</h1>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        {intro}
                    </p>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    // Form
                    <div class="lg:col-span-2">
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <h2 class="flex items-center gap-2 text-2xl font-semibold text-gray-900">
                                <span>"🎁"</span>
                                "Claim Your Reward"
                            </h2>
                            <p class="text-gray-600 mt-1 mb-6">
                                "Enter your coupon code and payment details to receive your reward"
                            </p>

                            <form on:submit=on_submit class="space-y-6">
                                <FormField
                                    id=RedemptionField::CouponCode.id()
                                    label=RedemptionField::CouponCode.label()
                                    placeholder="Enter your coupon code (e.g., SOLAR123XYZ)"
                                    extra_class="text-lg font-mono"
                                    hint="You received this code via SMS when your referral was completed"
                                    value=Signal::derive(move || submission.with(|s| s.request().coupon_code.clone()))
                                    on_input=Callback::new(move |text: String| {
                                        submission.update(|s| s.edit(|r| RedemptionField::CouponCode.apply(r, text)))
                                    })
                                />

                                // Payout method
                                <fieldset class="space-y-4">
                                    <legend class="text-lg font-semibold text-gray-900 mb-3">"Choose Payment Method *"</legend>
                                    <div class="space-y-3">
                                        {PayoutMethod::ALL.into_iter().map(move |option| view! {
                                            <label class="flex items-center space-x-3 border rounded-lg p-4 hover:bg-gray-50 cursor-pointer">
                                                <input
                                                    type="radio"
                                                    name="payoutMethod"
                                                    id=option.value()
                                                    value=option.value()
                                                    prop:checked=move || method.get() == option
                                                    on:change=move |_| submission.update(|s| s.edit(|r| r.set_payout_method(option)))
                                                />
                                                <span class="text-xl">{method_icon(option)}</span>
                                                <div class="flex-1">
                                                    <span class="font-medium text-gray-900">{option.title()}</span>
                                                    <p class="text-sm text-gray-500">{option.blurb()}</p>
                                                </div>
                                            </label>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </fieldset>

                                // Payout details
                                {move || match method.get() {
                                    PayoutMethod::Upi => view! {
                                        <div class="space-y-2">
                                            {field(RedemptionField::UpiId, "yourname@paytm / yourname@phonepe")}
                                            <p class="text-sm text-gray-500">
                                                "Make sure your UPI ID is active and linked to your bank account"
                                            </p>
                                        </div>
                                    }.into_view(),
                                    PayoutMethod::Bank => view! {
                                        <div class="space-y-4">
                                            {field(RedemptionField::AccountHolderName, "Enter account holder name")}
                                            <div class="grid sm:grid-cols-2 gap-4">
                                                {field(RedemptionField::AccountNumber, "Enter account number")}
                                                {field(RedemptionField::IfscCode, "e.g., SBIN0001234")}
                                            </div>
                                        </div>
                                    }.into_view(),
                                }}

                                <button
                                    type="submit"
                                    class="w-full py-4 bg-orange-500 hover:bg-orange-600 disabled:opacity-60 disabled:cursor-not-allowed text-white text-lg font-semibold rounded-lg shadow transition"
                                    disabled=submitting
                                >
                                    {button_label}
                                </button>

                                {move || match submission.with(|s| s.phase().clone()) {
                                    FormPhase::Failed(message) => Some(view! {
                                        <p class="text-sm text-red-600 text-center">{message}" Please try again."</p>
                                    }),
                                    _ => None,
                                }}
                            </form>
                        </div>
                    </div>

                    // Sidebar
                    <div class="space-y-6">
                        <RewardCard
                            icon="₹"
                            title="Reward Details"
                            amount=reward_headline
                            caption="Referral Reward"
                            items=vec![
                                "No processing fees",
                                "UPI: Instant transfer",
                                "Bank: 1-2 business days",
                                "SMS confirmation sent",
                            ]
                        />
                        <NoteCard
                            title="Important Notes"
                            notes=vec![
                                "Each coupon can only be used once",
                                "Coupon expires 90 days after issuance",
                                "Ensure your payment details are correct",
                                "Contact support if you face any issues",
                            ]
                        />
                        <HelpCard/>
                    </div>
                </div>
            </div>
        </div>
    }
}
