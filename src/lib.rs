pub mod gloss_txt;
