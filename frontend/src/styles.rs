pub const PAGE: &str = "min-h-screen flex flex-col items-center justify-start p-4 md:p-8 bg-[#0f172a] text-white overflow-hidden";
pub const HEADER: &str = "w-full max-w-4xl flex items-center justify-between mb-8 relative z-10";
pub const TITLE: &str = "text-3xl md:text-5xl font-black pr-2 italic tracking-tighter bg-clip-text text-transparent bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600";
pub const SUBTITLE: &str = "text-xs text-blue-400 font-bold uppercase tracking-widest ml-1";
pub const MAIN: &str = "flex-1 flex flex-col items-center justify-center relative w-full max-w-lg z-10";
pub const GLASS_CARD: &str = "bg-white/5 backdrop-blur-sm border border-white/10";

pub const BUTTON_ICON: &str = "p-3 bg-white/5 border border-white/20 rounded-2xl hover:bg-white/10 transition-all hover:scale-110 active:scale-95 shadow-lg disabled:opacity-40 disabled:cursor-not-allowed disabled:hover:scale-100";
pub const BUTTON_SPIN_ACTIVE: &str = "bg-white text-black border-4 border-transparent";
pub const BUTTON_SPIN_DISABLED: &str = "bg-gray-800 cursor-not-allowed text-gray-500 border-gray-700";
pub const BUTTON_PRIMARY: &str = "px-6 py-2 bg-gradient-to-r from-cyan-600 to-blue-600 rounded-lg font-bold";
pub const BUTTON_ADD: &str = "bg-cyan-600 hover:bg-cyan-500 text-white px-4 py-2 rounded-lg font-bold";
pub const BUTTON_ROW: &str = "p-1 hover:bg-white/10 rounded disabled:opacity-20";
pub const BUTTON_DELETE: &str = "p-1 hover:bg-red-500/20 text-red-400 rounded";
pub const BUTTON_LINK: &str = "text-gray-400 hover:text-white text-sm";

pub const MODAL_SHELL: &str = "fixed inset-0 z-50 flex items-center justify-center p-4";
pub const MODAL_BACKDROP: &str = "absolute inset-0 bg-black/60 backdrop-blur-sm";
pub const MODAL_PANEL: &str = "relative w-full max-w-lg bg-[#1a1a2e] border border-white/10 rounded-2xl shadow-2xl flex flex-col max-h-[90vh]";
pub const INPUT: &str = "flex-1 bg-white/5 border border-white/10 rounded-lg px-4 py-2 focus:outline-none focus:border-cyan-500";
pub const INPUT_INLINE: &str = "flex-1 bg-transparent border-none focus:outline-none text-sm";
pub const TEXT_LABEL: &str = "text-sm text-gray-400 font-medium";
pub const TEXT_HINT: &str = "text-sm text-white/40 font-medium";
pub const TEXT_SECTION: &str = "text-xs font-bold text-white/30 uppercase tracking-[0.2em] mb-4 text-center";
