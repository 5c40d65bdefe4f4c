pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16";
pub const SECTION: &str = "scroll-mt-16 bg-gray-50 dark:bg-gray-900";
pub const SECTION_ALT: &str = "scroll-mt-16 bg-white dark:bg-gray-800";
pub const SECTION_GRID: &str = "py-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6";

pub const HEADER: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50 transition-all duration-300";
pub const HEADER_SCROLLED: &str = "shadow-lg bg-white/90 dark:bg-gray-800/90";
pub const HEADER_HIDDEN: &str = "-translate-y-full";
pub const SCROLL_TOP: &str = "fixed bottom-8 right-8 z-40 h-12 w-12 rounded-full bg-blue-600 text-white text-2xl shadow-lg transition-all duration-300";
pub const SCROLL_TOP_HIDDEN: &str = "opacity-0 translate-y-5 pointer-events-none";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "hidden md:flex items-center space-x-4";
pub const NAV_ITEMS_OPEN: &str = "absolute top-16 inset-x-0 flex flex-col bg-white dark:bg-gray-800 p-4 space-y-2 md:static md:flex-row md:space-y-0 md:space-x-4 md:p-0 md:bg-transparent";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-all duration-200";
pub const NAV_LINK_ACTIVE: &str = "relative px-3 py-2 text-sm font-medium text-blue-600 dark:text-blue-400";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg hover:shadow-xl p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-60";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_FILTER: &str = "px-3 py-1 rounded-full text-sm border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300";
pub const BUTTON_FILTER_ACTIVE: &str = "px-3 py-1 rounded-full text-sm bg-blue-600 text-white border border-blue-600";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500 sm:text-sm";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400 mb-6";
pub const TEXT_H2: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 bg-black/60 backdrop-blur-sm";
pub const MODAL: &str = "fixed inset-0 z-50 flex items-center justify-center p-4";
pub const MODAL_PANEL: &str = "relative bg-white dark:bg-gray-900 rounded-xl shadow-xl p-6 max-w-3xl w-full";

pub const ALERT_SUCCESS: &str = "fixed top-6 right-6 z-50 max-w-md bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg px-4 py-3 text-green-700 dark:text-green-200 shadow-lg";
pub const ALERT_ERROR: &str = "fixed top-6 right-6 z-50 max-w-md bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg px-4 py-3 text-red-700 dark:text-red-200 shadow-lg";
pub const ALERT_INFO: &str = "fixed top-6 right-6 z-50 max-w-md bg-blue-50 dark:bg-blue-900/50 border border-blue-200 dark:border-blue-800 rounded-lg px-4 py-3 text-blue-700 dark:text-blue-200 shadow-lg";

pub const CAROUSEL: &str = "relative overflow-hidden";
pub const CAROUSEL_VIEWPORT: &str = "overflow-hidden touch-pan-y select-none focus:outline-none";
pub const CAROUSEL_TRACK: &str = "flex will-change-transform";
pub const CAROUSEL_SLIDE: &str = "w-full shrink-0 px-8 py-6";
pub const CAROUSEL_DOT: &str = "w-3 h-3 rounded-full bg-gray-300 dark:bg-gray-600";
pub const CAROUSEL_DOT_ACTIVE: &str = "w-3 h-3 rounded-full bg-blue-600";

pub const REVEAL: &str = "reveal opacity-0 translate-y-4 transition-all duration-700";
pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-gray-200/50 dark:border-gray-700/50";
pub const FOOTER_LINK: &str = "text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
