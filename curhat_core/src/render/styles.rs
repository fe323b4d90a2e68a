//! Embedded stylesheet for the landing page

pub const PAGE_CSS: &str = r#"
body{margin:0;font-family:'Quicksand',sans-serif;background-color:#fdfbfb;color:#4a4a4a;line-height:1.6;scroll-behavior:smooth}
header{background-color:rgba(255,255,255,.9);backdrop-filter:blur(10px);position:sticky;top:0;z-index:1000;padding:1rem 0;box-shadow:0 4px 20px rgba(0,0,0,.03)}
section{scroll-margin-top:80px}
h1,h2,h3{color:#2d6a4f;font-weight:700}
.container{max-width:1000px;margin:0 auto;padding:0 24px}
.flex-nav{display:flex;justify-content:space-between;align-items:center}
.logo{font-size:1.6rem;font-weight:800;color:#2d6a4f;text-decoration:none;letter-spacing:-.5px}
.nav-links a{margin-left:24px;text-decoration:none;color:#555;font-weight:600;transition:all .3s;font-size:.95rem}
.nav-links a:hover{color:#a8dadc}
.title-accent{color:#a8dadc}
#hero-section{min-height:85vh;display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;background:linear-gradient(135deg,#fdfcfb 0%,#e2d1c3 100%);padding:2rem;position:relative;overflow:hidden}
#hero-section::after{content:'';position:absolute;width:300px;height:300px;background:radial-gradient(circle,rgba(168,218,220,.2) 0%,rgba(255,255,255,0) 70%);top:-100px;right:-100px;border-radius:50%}
#hero-section h1{font-size:clamp(2.5rem,8vw,4rem);margin-bottom:1.5rem;line-height:1.1}
.hero-kicker{color:#a8dadc;font-weight:700;letter-spacing:2px;text-transform:uppercase;font-size:.8rem}
.hero-lead{font-size:1.2rem;max-width:600px;margin:0 auto 2rem;color:#666}
.section-padding{padding:100px 0}
.section-intro{text-align:center;margin-bottom:60px}
.section-intro p{color:#777;font-size:1.1rem}
.grid-3{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:30px;margin-top:50px}
.feature-card{background:white;padding:40px;border-radius:24px;text-align:center;transition:transform .3s,box-shadow .3s;border:1px solid #f0f0f0}
.feature-card:hover{transform:translateY(-10px);box-shadow:0 20px 40px rgba(0,0,0,.05)}
.feature-icon{font-size:2.5rem;margin-bottom:20px;display:block}
.how-it-works{background-color:#f1faee;border-radius:40px;padding:60px;margin-top:60px}
.how-it-works h3{text-align:center;margin-bottom:40px}
.step{display:flex;align-items:center;gap:20px;margin-bottom:30px}
.step-num{background:#a8dadc;color:white;width:40px;height:40px;min-width:40px;border-radius:50%;display:flex;align-items:center;justify-content:center;font-weight:700}
#curhat{background-color:#fdfbfb;background-image:radial-gradient(#e2d1c3 .5px,#fdfbfb .5px);background-size:20px 20px}
.card-main{background:white;border-radius:32px;padding:50px;box-shadow:0 30px 60px rgba(0,0,0,.08);max-width:800px;margin:-80px auto 0;position:relative;z-index:2}
.card-main>h2{text-align:center;margin-bottom:10px}
.card-subtitle{text-align:center;color:#888;margin-bottom:40px}
.vent-form label{display:block;margin-bottom:8px;font-weight:600;font-size:.9rem;color:#666}
.vent-form textarea{width:100%;min-height:180px;border:2px solid #f0f0f0;border-radius:16px;padding:20px;font-family:inherit;font-size:1.05rem;margin-bottom:24px;resize:vertical;transition:all .3s;background:#fbfbfb;box-sizing:border-box}
.vent-form textarea:focus{outline:none;border-color:#a8dadc;background:white;box-shadow:0 0 0 4px rgba(168,218,220,.1)}
input[type="text"]{width:100%;padding:14px 20px;margin-bottom:24px;border:2px solid #f0f0f0;border-radius:16px;box-sizing:border-box;background:#fbfbfb;font-size:1rem}
input[type="text"]:focus{outline:none;border-color:#a8dadc;background:white}
.form-actions{text-align:center}
.btn-primary{background-color:#a8dadc;color:white;border:none;padding:18px 40px;border-radius:100px;font-size:1.1rem;cursor:pointer;transition:all .3s cubic-bezier(.175,.885,.32,1.275);display:inline-block;font-weight:700;text-decoration:none;box-shadow:0 10px 20px rgba(168,218,220,.3)}
.btn-primary:hover{background-color:#457b9d;transform:scale(1.05);box-shadow:0 15px 30px rgba(69,123,157,.3)}
.btn-primary:disabled{opacity:.7;cursor:wait;transform:none}
.ai-response{margin-top:40px;padding:30px;background-color:#f1faee;border-radius:20px;border:1px solid #d8e2dc;animation:slideIn .6s ease-out;position:relative}
.ai-response::before{content:'\2728';position:absolute;top:-15px;left:20px;background:#a8dadc;width:30px;height:30px;display:flex;align-items:center;justify-content:center;border-radius:50%;font-size:.8rem}
.ai-response-label{font-size:.9rem;font-weight:700;color:#2d6a4f;margin-bottom:10px}
.ai-response-text{font-size:1.1rem;font-style:italic;color:#444;line-height:1.8}
.media-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:40px;margin-top:50px}
.media-item{background:white;padding:30px;border-radius:24px;border:1px solid #f0f0f0;text-align:center}
.media-item h3{font-size:1.1rem}
.media-caption{font-size:.8rem;color:#999;margin-top:10px}
video{width:100%;border-radius:16px;margin-top:15px}
audio{width:100%;margin-top:15px}
.disclaimer{font-size:.9rem;color:#999;text-align:center;max-width:700px;margin:60px auto;padding:30px;border-top:1px solid #eee;line-height:1.8}
footer{background-color:#fff;padding:60px 0;text-align:center;border-top:1px solid #eee}
.footer-brand{font-weight:700;color:#2d6a4f;margin-bottom:20px}
.footer-note{font-size:.9rem;color:#999}
.footer-links{margin-top:20px}
.footer-links a{color:#a8dadc;margin:0 15px;text-decoration:none;font-weight:600}
@keyframes slideIn{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:translateY(0)}}
"#;

/// Disables the submit button and swaps its label while the form is posting.
pub const FORM_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded',function(){
  var form=document.querySelector('.vent-form');
  if(!form)return;
  form.addEventListener('submit',function(e){
    var story=form.querySelector('#story');
    if(!story||!story.value.trim()){e.preventDefault();return;}
    var button=form.querySelector('button[type=submit]');
    if(button){button.disabled=true;button.textContent=button.dataset.loadingLabel;}
  });
});
"#;
