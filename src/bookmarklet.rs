//! Bookmarklet generation
//!
//! Builds the two `javascript:` artifacts: a start bookmarklet with the
//! configuration baked in, and a fixed stop bookmarklet. The start script's
//! tick body mirrors [`crate::session::advance`] term for term - that pure
//! function is the single source of truth, the script is its serialized twin
//! running in a foreign page.

use crate::session::ScrollConfig;

/// Well-known global property used as the singleton session handle.
///
/// A later invocation stops whatever is registered here before installing
/// itself, and publishes its own `stop` capability for the stop bookmarklet.
pub const GLOBAL_HANDLE: &str = "__autoScroller__";

/// Per-frame tick body, with `speed`, `dir` and `loop` bound by the wrapper.
///
/// Matches the native algorithm: zero elapsed time is inert, the boundary
/// matching the direction wraps (only when the page can actually scroll) or
/// parks on the edge and stops, and a tick that moves less than 0.1px stops
/// unconditionally.
const TICK_BODY: &str = "var state={running:true,last:null,raf:0};\
function step(ts){\
if(!state.running)return;\
var last=state.last==null?ts:state.last;\
var dt=Math.max(0,ts-last)/1000;\
state.last=ts;\
if(dt<=0){state.raf=requestAnimationFrame(step);return}\
var before=window.scrollY;\
window.scrollBy({top:speed*dt*dir,left:0,behavior:'auto'});\
var max=Math.max(document.documentElement.scrollHeight,document.body.scrollHeight);\
var atTop=window.scrollY<=0;\
var atBottom=Math.ceil(window.scrollY+window.innerHeight)>=max;\
if((dir>0&&atBottom)||(dir<0&&atTop)){\
if(loop&&max-window.innerHeight>0.1){window.scrollTo({top:dir>0?0:max,behavior:'auto'})}\
else{window.scrollTo({top:dir>0?max:0,behavior:'auto'});stop();return}\
}else if(Math.abs(window.scrollY-before)<0.1){stop();return}\
state.raf=requestAnimationFrame(step)}\
function stop(){state.running=false;cancelAnimationFrame(state.raf)}";

/// Build the start artifact for `config`.
///
/// The embedded speed comes straight from the validated config, so it is
/// already clamped to the one accepted range.
pub fn scroll_uri(config: &ScrollConfig) -> String {
    let speed = config.speed.round() as i64;
    let dir: i8 = match config.direction {
        crate::session::Direction::Down => 1,
        crate::session::Direction::Up => -1,
    };
    format!(
        "javascript:(function(){{try{{\
var prev=window.{handle};if(prev&&prev.stop){{prev.stop()}}\
var speed={speed},dir={dir},loop={loop_flag};\
{tick}\
window.{handle}={{stop:stop}};\
state.raf=requestAnimationFrame(step)\
}}catch(e){{console.error('autoscroll bookmarklet error',e)}}}})();",
        handle = GLOBAL_HANDLE,
        speed = speed,
        dir = dir,
        loop_flag = config.loop_at_end,
        tick = TICK_BODY,
    )
}

/// Build the fixed stop artifact: look up the handle, invoke `stop` when
/// exposed, silently no-op otherwise.
pub fn stop_uri() -> String {
    format!(
        "javascript:(function(){{try{{\
var s=window.{handle};if(s&&s.stop){{s.stop()}}\
}}catch(e){{}}}})();",
        handle = GLOBAL_HANDLE,
    )
}
