//! Page footer: logo, contact grid, social-button strip.

use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Page footer component.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-200 w-full pt-6 border-t">
            <div class="flex justify-between items-start px-8">
                <div class="flex flex-col items-start mt-[-50px]">
                    <div class="mb-0">
                        <img
                            src="/assets/Logo.png"
                            alt="G-Easy Logo"
                            class="w-36 h-36 object-contain"
                        />
                    </div>
                    <p class="text-xs text-gray-500 mt-[-18px]">
                        { "Convenient English vocabulary learning system for busy people" }
                    </p>
                </div>

                <div class="flex items-start">
                    <div class="border-l border-gray-400 h-24 mx-4 hidden md:block"></div>

                    <div class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-3 text-sm text-gray-700">
                        <div class="flex items-center gap-2">
                            <span class="text-gray-500"><Icon kind={IconKind::Phone} /></span>
                            <span class="text-gray-600">{ "Contact" }</span>
                        </div>
                        <a href="tel:+841234567890" class="hover:underline hover:text-orange-500">
                            { "+84 1234567890" }
                        </a>

                        <div class="flex items-center gap-2">
                            <span class="text-gray-500"><Icon kind={IconKind::MapPin} /></span>
                            <span class="text-gray-600">{ "Address" }</span>
                        </div>
                        <a href="#" class="hover:underline hover:text-orange-500">
                            { "Nguyễn Trãi, Thanh Xuân, Hà Nội" }
                        </a>

                        <div class="flex items-center gap-2">
                            <span class="text-gray-500"><Icon kind={IconKind::Mail} /></span>
                            <span class="text-gray-600">{ "Email" }</span>
                        </div>
                        <a href="mailto:abcd@gmail.com" class="hover:underline hover:text-orange-500">
                            { "abcd@gmail.com" }
                        </a>
                    </div>
                </div>
            </div>

            <div class="mt-6 bg-gray-300">
                <div class="px-8 py-2 flex justify-end space-x-2">
                    <a href="#" class="w-7 h-7 bg-[#1877F2] rounded-lg flex items-center justify-center text-white hover:brightness-110 transition">
                        <svg width="12" height="12" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z" />
                        </svg>
                    </a>
                    <a href="#" class="w-7 h-7 bg-[#0A66C2] rounded-lg flex items-center justify-center text-white hover:brightness-110 transition">
                        <svg width="12" height="12" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" />
                        </svg>
                    </a>
                    <a href="#" class="w-7 h-7 bg-white border border-gray-300 rounded-lg flex items-center justify-center hover:border-orange-500 transition">
                        <svg width="12" height="12" viewBox="0 0 24 24" fill="#EA4335">
                            <path d="M24 5.457v13.909c0 .904-.732 1.636-1.636 1.636h-3.819V11.73L12 16.64l-6.545-4.91v9.273H1.636A1.636 1.636 0 0 1 0 19.366V5.457c0-2.023 2.309-3.178 3.927-1.964L5.455 4.64 12 9.548l6.545-4.91 1.528-1.145C21.69 2.28 24 3.434 24 5.457z" />
                        </svg>
                    </a>
                </div>
            </div>
        </footer>
    }
}
